use crate::{
    algorithm::growth::{GrowthOutcome, GrowthSchedule, RadiusGrower},
    algorithm::selection::{CandidateSelector, NeighborMode},
    analysis::sampling::{ColorSampler, PercentileRange},
    io::error::{AlgorithmError, Result, invalid_parameter},
    io::image::PixelSource,
    spatial::{Disk, PlacedSet, RadiusBounds, RadiusPolicy},
};
use log::debug;
use rand::{SeedableRng, rngs::StdRng};

/// Parameters controlling candidate selection and radius growth
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlgorithmConfig {
    /// Number of disks to place
    pub n_points: usize,
    /// Candidate centers scored per round
    pub n_tries: usize,
    /// Which placed disks contribute to a candidate's score
    pub neighbor_mode: NeighborMode,
    /// Lightness spread a region must stay below to keep growing
    pub tolerance: f64,
    /// How the radius range is obtained from the image
    pub radius_policy: RadiusPolicy,
    /// Growth step parameters
    pub growth: GrowthSchedule,
    /// Percentiles bounding the lightness spread
    pub percentiles: PercentileRange,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        use crate::io::configuration::{DEFAULT_POINTS, DEFAULT_TOLERANCE, DEFAULT_TRIES};
        Self {
            n_points: DEFAULT_POINTS,
            n_tries: DEFAULT_TRIES,
            neighbor_mode: NeighborMode::default(),
            tolerance: DEFAULT_TOLERANCE,
            radius_policy: RadiusPolicy::default(),
            growth: GrowthSchedule::default(),
            percentiles: PercentileRange::default(),
        }
    }
}

impl AlgorithmConfig {
    /// Reject contradictory or unusable settings before any placement work
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range
    pub fn validate(&self) -> Result<()> {
        if self.n_tries == 0 {
            return Err(invalid_parameter(
                "n_tries",
                &self.n_tries,
                &"at least one candidate per round is required",
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(invalid_parameter(
                "tolerance",
                &self.tolerance,
                &"must be a finite, non-negative lightness spread",
            ));
        }
        if let RadiusPolicy::Explicit { min, max } = self.radius_policy {
            RadiusBounds::new(min, max)?;
        }
        self.neighbor_mode.validate()?;
        self.growth.validate()?;
        self.percentiles.validate()
    }
}

/// Greedy disk placement over a pixel source
///
/// Every round picks the sparsest of the random candidates, grows a disk
/// there and commits it. Rounds are strictly sequential: scoring in round k
/// sees exactly the disks committed in rounds 0..k-1. Committed disks are
/// never revised.
pub struct PointillistPlacement<'a, P: PixelSource> {
    /// Parameters the engine was built with
    pub config: AlgorithmConfig,
    /// Radius range resolved for the source image
    pub bounds: RadiusBounds,
    /// Completed rounds
    pub iteration: usize,
    sampler: ColorSampler<'a, P>,
    selector: CandidateSelector,
    grower: RadiusGrower,
    placed: PlacedSet,
    rng: StdRng,
}

impl<'a, P: PixelSource> PointillistPlacement<'a, P> {
    /// Create an engine seeded for reproducible placement
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration fails validation
    /// - The source image has no pixels
    /// - The radius policy yields invalid bounds for this image
    pub fn new(source: &'a P, config: AlgorithmConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!("image has no pixels ({width}x{height})"),
            });
        }
        let bounds = config.radius_policy.resolve(width, height)?;

        Ok(Self {
            config,
            bounds,
            iteration: 0,
            sampler: ColorSampler::new(source, config.percentiles),
            selector: CandidateSelector::new(config.n_tries, config.neighbor_mode),
            grower: RadiusGrower::new(config.growth, config.tolerance),
            placed: PlacedSet::new(width, height, bounds.max),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Disks committed so far, in placement order
    pub fn disks(&self) -> &[Disk] {
        self.placed.disks()
    }

    /// The committed set including its spatial index
    pub const fn placed(&self) -> &PlacedSet {
        &self.placed
    }

    /// Whether the configured number of disks has been placed
    pub const fn is_complete(&self) -> bool {
        self.placed.len() >= self.config.n_points
    }

    /// Run one select, grow and commit round
    ///
    /// Does not check `n_points`; callers driving rounds themselves decide
    /// when to stop.
    ///
    /// # Errors
    ///
    /// Returns an error if sampling the chosen region fails
    pub fn run_iteration(&mut self) -> Result<Disk> {
        let (width, height) = self.sampler.source().dimensions();
        let candidate = self
            .selector
            .select(&mut self.rng, width, height, &self.placed);

        let GrowthOutcome {
            radius,
            color,
            iterations,
            ..
        } = self
            .grower
            .grow(&self.sampler, candidate.position, self.bounds)?;

        let disk = Disk {
            center: candidate.position,
            radius,
            color,
        };
        self.placed.push(disk);
        self.iteration += 1;

        debug!(
            "Placed disk {}: center ({}, {}), radius {radius} after {iterations} samples, score {:.4}, color {:?}",
            self.iteration - 1,
            disk.center[0],
            disk.center[1],
            candidate.score,
            disk.color_bytes()
        );

        Ok(disk)
    }

    /// Place the remaining disks up to `n_points`
    ///
    /// # Errors
    ///
    /// Returns an error if any round fails
    pub fn run(&mut self) -> Result<&[Disk]> {
        while !self.is_complete() {
            self.run_iteration()?;
        }
        Ok(self.placed.disks())
    }

    /// Consume the engine, keeping the placed disks
    pub fn into_disks(self) -> Vec<Disk> {
        self.placed.into_disks()
    }
}

/// Place `config.n_points` disks on `source` with a seeded generator
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a round fails
pub fn place_disks<P: PixelSource>(
    source: &P,
    config: AlgorithmConfig,
    seed: u64,
) -> Result<Vec<Disk>> {
    let mut engine = PointillistPlacement::new(source, config, seed)?;
    engine.run()?;
    Ok(engine.into_disks())
}
