use crate::arena::Rules;
use clap::Parser;

/// Command-line and environment configuration for the hosting server.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Socket address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:5000")]
    pub bind: String,
    /// HTTP worker threads.
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
    /// Reject rounds with a missing choice instead of picking one at random.
    #[arg(long, env = "STRICT_CHOICES")]
    pub strict: bool,
}

impl Config {
    pub fn rules(&self) -> Rules {
        if self.strict {
            Rules::strict()
        } else {
            Rules::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let config = Config::try_parse_from(["hosting", "--bind", "0.0.0.0:8080", "--workers", "2", "--strict"]).unwrap();
        assert!(config.bind == "0.0.0.0:8080");
        assert!(config.workers == 2);
        assert!(config.rules() == Rules::strict());
    }

    #[test]
    fn lenient_by_default() {
        let config = Config::try_parse_from(["hosting", "--bind", "127.0.0.1:0"]).unwrap();
        assert!(config.rules().random_fill);
    }
}
