/// Placement engine and its configuration
pub mod executor;
/// Radius growth under a lightness uniformity tolerance
pub mod growth;
/// Candidate center selection by radius-normalized sparsity
pub mod selection;
