use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DateOrder {
    Ymd,
    Dmy,
}

/// How the month sub-field is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonthEncoding {
    Plain,
    /// `(first year of the century, month offset)`. The offset selects the century, as in
    /// the Polish PESEL where 2000-2099 adds 20 to the month.
    Century(&'static [(i32, u32)]),
    /// Extra offsets that are also accepted on the month, as in the Czech rodne cislo
    /// where women add 50.
    Alternates(&'static [u32]),
}

/// A calendar date embedded in an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateLayout {
    pub order: DateOrder,
    pub year_digits: usize,
    pub month: MonthEncoding,
    /// Inclusive range of years the date may fall in, when something outside the date
    /// (a century sign, a check variant) fixes the century.
    pub window: Option<(i32, i32)>,
}

const EARLIEST_BIRTH_YEAR: i32 = 1950;
const LATEST_BIRTH_YEAR: i32 = 2005;

impl DateLayout {
    pub const fn new(order: DateOrder, year_digits: usize) -> Self {
        Self {
            order,
            year_digits,
            month: MonthEncoding::Plain,
            window: None,
        }
    }

    pub const fn month(self, month: MonthEncoding) -> Self {
        Self { month, ..self }
    }

    pub const fn within(self, first: i32, last: i32) -> Self {
        Self {
            window: Some((first, last)),
            ..self
        }
    }

    pub fn width(&self) -> usize {
        self.year_digits + 4
    }

    /// Renders `date`, or `None` when the layout cannot express its year.
    pub fn render(&self, date: NaiveDate, month_offset: u32) -> Option<String> {
        let month = match self.month {
            MonthEncoding::Plain | MonthEncoding::Alternates(_) => date.month() + month_offset,
            MonthEncoding::Century(offsets) => {
                let (_, offset) = offsets
                    .iter()
                    .find(|(start, _)| (*start..*start + 100).contains(&date.year()))?;
                date.month() + offset
            }
        };
        let year = if self.year_digits == 2 {
            format!("{:02}", date.year().rem_euclid(100))
        } else {
            format!("{:04}", date.year())
        };
        Some(match self.order {
            DateOrder::Ymd => format!("{year}{month:02}{:02}", date.day()),
            DateOrder::Dmy => format!("{:02}{month:02}{year}", date.day()),
        })
    }

    /// Every calendar date `text` can stand for. Two-digit years are read in both the
    /// 1900s and the 2000s unless the month carries the century.
    pub fn parse(&self, text: &str) -> Vec<NaiveDate> {
        if text.len() != self.width() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return vec![];
        }
        let (year, month, day) = match self.order {
            DateOrder::Ymd => (
                &text[..self.year_digits],
                &text[self.year_digits..self.year_digits + 2],
                &text[self.year_digits + 2..],
            ),
            DateOrder::Dmy => (&text[4..], &text[2..4], &text[..2]),
        };
        let (Ok(year), Ok(month), Ok(day)) = (
            year.parse::<i32>(),
            month.parse::<u32>(),
            day.parse::<u32>(),
        ) else {
            return vec![];
        };

        let candidates: Vec<(i32, u32)> = match self.month {
            MonthEncoding::Plain => self.years(year).map(|y| (y, month)).collect(),
            MonthEncoding::Alternates(offsets) => std::iter::once(0)
                .chain(offsets.iter().copied())
                .filter(|offset| month > *offset)
                .flat_map(|offset| self.years(year).map(move |y| (y, month - offset)))
                .collect(),
            MonthEncoding::Century(offsets) => offsets
                .iter()
                .filter(|(_, offset)| month > *offset && month <= offset + 12)
                .map(|(start, offset)| (start + year, month - offset))
                .collect(),
        };
        candidates
            .into_iter()
            .filter(|(y, _)| self.in_window(*y))
            .filter_map(|(y, m)| NaiveDate::from_ymd_opt(y, m, day))
            .collect()
    }

    /// The date of birth `text` stands for. When the century is open, the latest reading
    /// that is not in the future wins.
    pub fn birth_date(&self, text: &str) -> Option<NaiveDate> {
        let today = Local::now().date_naive();
        let candidates = self.parse(text);
        candidates
            .iter()
            .filter(|date| **date <= today)
            .max()
            .or_else(|| candidates.iter().min())
            .copied()
    }

    /// The month field as written, offsets included.
    pub(crate) fn month_field(&self, text: &str) -> Option<u32> {
        if text.len() != self.width() {
            return None;
        }
        let month = match self.order {
            DateOrder::Ymd => text.get(self.year_digits..self.year_digits + 2),
            DateOrder::Dmy => text.get(2..4),
        };
        month.and_then(|month| month.parse().ok())
    }

    /// Whether a date in `year` can be written with this layout.
    pub fn admits(&self, year: i32) -> bool {
        let century_fits = match self.month {
            MonthEncoding::Century(offsets) => offsets
                .iter()
                .any(|(start, _)| (*start..*start + 100).contains(&year)),
            MonthEncoding::Plain | MonthEncoding::Alternates(_) => {
                self.year_digits == 2 || (0..10_000).contains(&year)
            }
        };
        century_fits && self.in_window(year)
    }

    fn in_window(&self, year: i32) -> bool {
        self.window
            .map(|(first, last)| (first..=last).contains(&year))
            .unwrap_or(true)
    }

    fn years(&self, year: i32) -> impl Iterator<Item = i32> {
        let full = if self.year_digits == 2 {
            vec![1900 + year, 2000 + year]
        } else {
            vec![year]
        };
        full.into_iter()
    }

    /// A random date of birth rendered with this layout: in `year` when the layout admits
    /// it, otherwise in a plausible range clipped to the window.
    pub(crate) fn random<R: Rng + ?Sized>(&self, rng: &mut R, year: Option<i32>) -> String {
        let (first, last) = match year.filter(|year| self.admits(*year)) {
            Some(year) => (year, year),
            None => self.birth_years(),
        };
        loop {
            let date = random_date(rng, first, last);
            let month_offset = match self.month {
                MonthEncoding::Alternates(offsets) if !offsets.is_empty() && rng.gen_bool(0.5) => {
                    offsets[rng.gen_range(0..offsets.len())]
                }
                _ => 0,
            };
            if let Some(text) = self.render(date, month_offset) {
                return text;
            }
        }
    }

    /// The default birth years intersected with the window, or the whole window when
    /// they do not meet.
    fn birth_years(&self) -> (i32, i32) {
        match self.window {
            None => (EARLIEST_BIRTH_YEAR, LATEST_BIRTH_YEAR),
            Some((first, last)) => {
                let clipped = (first.max(EARLIEST_BIRTH_YEAR), last.min(LATEST_BIRTH_YEAR));
                if clipped.0 <= clipped.1 {
                    clipped
                } else {
                    (first, last)
                }
            }
        }
    }
}

fn random_date<R: Rng + ?Sized>(rng: &mut R, first: i32, last: i32) -> NaiveDate {
    loop {
        let year = rng.gen_range(first..=last);
        let ordinal = rng.gen_range(1..=366);
        if let Some(date) = NaiveDate::from_yo_opt(year, ordinal) {
            return date;
        }
    }
}
