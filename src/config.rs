use crate::sequence::{Cutoff, THRESHOLD};

/// Settings for an [`Emitter`][crate::Emitter]
///
/// # Example
///
/// ```
/// use fibcycle::{Cutoff, EmitterConfigBuilder};
/// # fn main() -> Result<(), fibcycle::Error> {
/// let config = EmitterConfigBuilder::default()
///     .threshold(100)
///     .cutoff(Cutoff::Emitted)
///     .build()?;
/// assert_eq!(config.threshold(), 100);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct EmitterConfig {
    #[builder(default = "THRESHOLD")]
    threshold: i32,
    #[builder(default)]
    cutoff: Cutoff,
}

impl EmitterConfig {
    pub fn threshold(&self) -> i32 {
        self.threshold
    }
    pub fn cutoff(&self) -> Cutoff {
        self.cutoff
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            threshold: THRESHOLD,
            cutoff: Cutoff::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = EmitterConfigBuilder::default().build().unwrap();
        assert_eq!(built, EmitterConfig::default());
        assert_eq!(built.threshold(), 255);
        assert_eq!(built.cutoff(), Cutoff::Advanced);
    }

    #[test]
    fn builder_overrides() {
        let built = EmitterConfigBuilder::default()
            .threshold(10)
            .cutoff(Cutoff::Emitted)
            .build()
            .unwrap();
        assert_eq!(built.threshold(), 10);
        assert_eq!(built.cutoff(), Cutoff::Emitted);
    }
}
