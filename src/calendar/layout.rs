use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Orientation of a rendered year
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Layout {
    /// One row per month, with the month's slots running left to right
    #[default]
    Horizontal,
    /// One row per slot, with the months running left to right
    Vertical,
}

impl Layout {
    pub fn name(&self) -> &'static str {
        match self {
            Layout::Horizontal => "horizontal",
            Layout::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Layout, ParseLayoutError> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Layout::Horizontal),
            "vertical" | "v" => Ok(Layout::Vertical),
            _ => Err(ParseLayoutError(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid layout {0:?}; expected \"horizontal\" or \"vertical\"")]
pub struct ParseLayoutError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Layout::default(), Layout::Horizontal);
    }

    #[test]
    fn test_parse() {
        assert_eq!("horizontal".parse::<Layout>(), Ok(Layout::Horizontal));
        assert_eq!("H".parse::<Layout>(), Ok(Layout::Horizontal));
        assert_eq!("Vertical".parse::<Layout>(), Ok(Layout::Vertical));
        assert_eq!("v".parse::<Layout>(), Ok(Layout::Vertical));
    }

    #[test]
    fn test_parse_error() {
        assert_eq!(
            "diagonal".parse::<Layout>().map_err(|e| e.to_string()),
            Err(String::from(
                r#"invalid layout "diagonal"; expected "horizontal" or "vertical""#
            ))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for layout in [Layout::Horizontal, Layout::Vertical] {
            assert_eq!(layout.to_string().parse::<Layout>(), Ok(layout));
        }
    }
}
