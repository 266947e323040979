//! Structural checks over the test suite itself

mod coverage;
