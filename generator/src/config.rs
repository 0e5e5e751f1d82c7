//! Generation settings

use crate::error::{ClientGenError, Result};

/// Person records generated when no size is given
pub const DEFAULT_POPULATION_SIZE: u32 = 9900;

/// People per company when no ratio is given
pub const DEFAULT_RATIO: u32 = 100;

/// Destination file, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "data/clients.csv";

/// Validated population settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    population_size: u32,
    ratio: u32,
}

impl GenerationConfig {
    /// A zero `population_size` is allowed (one company is still produced);
    /// a zero `ratio` is rejected.
    pub fn new(population_size: u32, ratio: u32) -> Result<Self> {
        if ratio == 0 {
            return Err(ClientGenError::InvalidRatio);
        }
        Ok(Self {
            population_size,
            ratio,
        })
    }

    pub fn population_size(&self) -> u32 {
        self.population_size
    }

    pub fn ratio(&self) -> u32 {
        self.ratio
    }

    /// Number of person records
    pub fn people_count(&self) -> usize {
        self.population_size as usize
    }

    /// `max(1, population_size / ratio)`
    pub fn company_count(&self) -> usize {
        ((self.population_size / self.ratio) as usize).max(1)
    }

    pub fn total_count(&self) -> usize {
        self.people_count() + self.company_count()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            ratio: DEFAULT_RATIO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_count_floors_then_clamps() {
        let counts: Vec<(u32, usize)> = [(1000, 100), (0, 100), (50, 100), (199, 100), (9900, 100), (7, 1)]
            .into_iter()
            .map(|(n, r)| (n, GenerationConfig::new(n, r).unwrap().company_count()))
            .collect();
        assert_eq!(counts, [(1000, 10), (0, 1), (50, 1), (199, 1), (9900, 99), (7, 7)]);
    }

    #[test]
    fn test_zero_ratio_rejected() {
        assert!(matches!(GenerationConfig::new(10, 0), Err(ClientGenError::InvalidRatio)));
    }

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.population_size(), 9900);
        assert_eq!(config.ratio(), 100);
        assert_eq!(config.total_count(), 9999);
    }
}
