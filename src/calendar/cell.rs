use time::Date;

/// Width that blank and plain date cells are padded to
pub const PAD_WIDTH: usize = 2;

static BLANK: &str = "  ";

/// How date cells are rendered: either always padded, or padded except for a
/// single date that is bracketed instead
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DatePrinter {
    #[default]
    Plain,
    Highlight(Date),
}

impl DatePrinter {
    pub fn new(highlight: Option<Date>) -> DatePrinter {
        match highlight {
            Some(date) => DatePrinter::Highlight(date),
            None => DatePrinter::Plain,
        }
    }

    pub fn highlight(&self) -> Option<Date> {
        match self {
            DatePrinter::Plain => None,
            DatePrinter::Highlight(date) => Some(*date),
        }
    }

    /// Format a single cell.  Empty slots are blank and ordinary dates are
    /// right-justified to [`PAD_WIDTH`]; the highlighted date is written as
    /// `[D]` with no padding, so it is one or two columns wider than its
    /// neighbors.
    pub fn print(&self, date: Option<Date>) -> String {
        match (date, self) {
            (None, _) => String::from(BLANK),
            (Some(d), DatePrinter::Highlight(target)) if d == *target => {
                format!("[{}]", d.day())
            }
            (Some(d), _) => format!("{:>PAD_WIDTH$}", d.day()),
        }
    }
}
