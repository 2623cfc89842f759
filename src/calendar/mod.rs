mod cell;
mod grid;
mod layout;
mod spacing;
pub use self::cell::{DatePrinter, PAD_WIDTH};
pub use self::grid::{CalendarGrid, GridPosition, SLOT_COUNT};
pub use self::layout::{Layout, ParseLayoutError};
pub use self::spacing::normalize_spacing;
use self::grid::months;
use std::fmt;
use time::{error::ComponentRange, Date};

pub static WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub static MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Separator between the month label and the first cell of a horizontal row
const HORIZONTAL_GUTTER: &str = "  ";

/// Separator between adjacent cells of a horizontal row
const HORIZONTAL_SEP: &str = " ";

/// Separator between the weekday label and the first cell of a vertical row
const VERTICAL_GUTTER: &str = "    ";

/// Separator between adjacent cells of a vertical row
const VERTICAL_SEP: &str = "  ";

/// Weekday labels for each slot of a month, Sunday first, in slot order
pub fn all_weekdays() -> impl Iterator<Item = &'static str> {
    WEEKDAYS
        .iter()
        .copied()
        .cycle()
        .take(usize::from(SLOT_COUNT))
}

/// A full year of dates, optionally with one date marked, ready to be rendered
/// as text
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Calendar {
    grid: CalendarGrid,
    printer: DatePrinter,
}

impl Calendar {
    /// Lay out `year`, bracketing `highlight` wherever it appears.  A
    /// highlight date from another year never matches.
    ///
    /// # Errors
    ///
    /// Returns the `time` crate's range error if `year` cannot be represented
    /// as a [`Date`].
    pub fn new(year: i32, highlight: Option<Date>) -> Result<Calendar, ComponentRange> {
        Ok(Calendar {
            grid: CalendarGrid::for_year(year)?,
            printer: DatePrinter::new(highlight),
        })
    }

    pub fn year(&self) -> i32 {
        self.grid.year()
    }

    pub fn highlight(&self) -> Option<Date> {
        self.printer.highlight()
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    /// The first line of either layout: the year followed by the month labels
    pub fn header(&self) -> String {
        format!("{} {}", self.year(), MONTHS.join(" "))
    }

    /// Render the year as a header line followed by one line per row of
    /// `layout`.  The result does not end with a newline.
    pub fn render(&self, layout: Layout) -> String {
        tracing::debug!(year = self.year(), %layout, "rendering calendar");
        let body = match layout {
            Layout::Horizontal => self.horizontal_lines(),
            Layout::Vertical => self.vertical_lines(),
        };
        let mut out = self.header();
        for line in body {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }

    fn horizontal_lines(&self) -> Vec<String> {
        months()
            .zip(MONTHS)
            .map(|(month, label)| {
                let cells = (1..=SLOT_COUNT)
                    .map(|slot| self.printer.print(self.grid.get(month, slot)))
                    .collect::<Vec<_>>()
                    .join(HORIZONTAL_SEP);
                normalize_spacing(&format!("{label}{HORIZONTAL_GUTTER}{cells}"))
            })
            .collect()
    }

    fn vertical_lines(&self) -> Vec<String> {
        (1..=SLOT_COUNT)
            .zip(all_weekdays())
            .map(|(slot, label)| {
                let cells = months()
                    .map(|month| self.printer.print(self.grid.get(month, slot)))
                    .collect::<Vec<_>>()
                    .join(VERTICAL_SEP);
                normalize_spacing(&format!("{label}{VERTICAL_GUTTER}{cells}"))
            })
            .collect()
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Layout::default()))
    }
}
