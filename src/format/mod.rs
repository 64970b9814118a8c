pub mod date;
pub mod segment;

use crate::checksum::ChecksumAlgorithm;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

pub use date::{DateLayout, DateOrder, MonthEncoding};
pub use segment::{CheckSpec, Cover, Gender, GenderCode, SegmentRole, SegmentSpec};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdKind {
    Iban,
    PersonalId,
    CompanyId,
    CreditCard,
    Swift,
    DriverLicense,
    TaxId,
    Passport,
    LegalEntityId,
    VatId,
    BankAccount,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Jcb,
    Diners,
    UnionPay,
}

/// What a descriptor is registered for: a country (ISO 3166 alpha-2, uppercase) or, for
/// payment cards, a brand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scope {
    Country(String),
    Brand(CardBrand),
}

impl Scope {
    pub fn country(code: &str) -> Self {
        Scope::Country(code.to_ascii_uppercase())
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Country(code) => f.write_str(code),
            Scope::Brand(brand) => write!(f, "{brand}"),
        }
    }
}

/// How a normalized identifier is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grouping {
    None,
    Blocks { size: usize, separator: char },
    /// `#` takes the next character, anything else is written as is.
    Pattern(&'static str),
    /// The text is written after the segment with the given index.
    Fields(&'static [(usize, &'static str)]),
}

impl Grouping {
    fn separators(&self) -> Vec<char> {
        match self {
            Grouping::None => vec![],
            Grouping::Blocks { separator, .. } => vec![*separator],
            Grouping::Pattern(pattern) => pattern.chars().filter(|c| *c != '#').collect(),
            Grouping::Fields(fields) => fields.iter().flat_map(|(_, text)| text.chars()).collect(),
        }
    }
}

/// Another arrangement of segments a format admits, such as the 10-digit Bulgarian VAT
/// number next to the 9-digit one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub segments: Vec<SegmentSpec>,
    /// Whether generation may produce it. Layouts that are only read exist for legacy or
    /// lenient inputs.
    pub generated: bool,
    /// Display grouping when it differs from the descriptor's.
    pub grouping: Option<Grouping>,
}

impl Layout {
    pub fn new(segments: Vec<SegmentSpec>) -> Self {
        Self {
            segments,
            generated: true,
            grouping: None,
        }
    }

    pub fn accepted_only(self) -> Self {
        Self {
            generated: false,
            ..self
        }
    }

    pub fn grouping(self, grouping: Grouping) -> Self {
        Self {
            grouping: Some(grouping),
            ..self
        }
    }
}

/// A layout of a descriptor with its effective grouping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRef<'a> {
    pub segments: &'a [SegmentSpec],
    pub generated: bool,
    pub grouping: Grouping,
}

impl<'a> LayoutRef<'a> {
    /// Length without and with the optional segments.
    pub fn lengths(&self) -> (usize, usize) {
        let full = self.segments.iter().map(|s| s.length).sum();
        let required = self
            .segments
            .iter()
            .filter(|s| !s.optional)
            .map(|s| s.length)
            .sum();
        (required, full)
    }

    /// The segments a value of `length` characters is made of.
    pub fn active(&self, length: usize) -> Option<&'a [SegmentSpec]> {
        let (required, full) = self.lengths();
        if length == full {
            Some(self.segments)
        } else if length == required {
            let count = self.segments.iter().take_while(|s| !s.optional).count();
            Some(&self.segments[..count])
        } else {
            None
        }
    }

    /// The segment that carries the holder's gender, with its index.
    pub fn gendered(&self) -> Option<(usize, &'a SegmentSpec)> {
        self.segments
            .iter()
            .enumerate()
            .find(|(_, segment)| segment.gender.is_some())
    }
}

/// How a leading country marker is treated when reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrefixPolicy {
    /// The input is taken as is.
    Strict,
    /// The leading literal segment is part of the canonical form but may be left out.
    Implied,
    /// The canonical form is bare, a leading marker is dropped if present.
    Tolerated(&'static str),
    /// As `Implied`, and this other marker is read as the leading literal (`GR` for the
    /// Greek `EL`).
    Aliased(&'static str),
}

/// Declarative layout and check rules of one identifier format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatDescriptor {
    pub kind: IdKind,
    pub scope: Scope,
    pub name: &'static str,
    pub segments: Vec<SegmentSpec>,
    pub display_grouping: Grouping,
    /// Separators that are accepted on input besides the display ones.
    pub extra_separators: &'static str,
    pub prefix: PrefixPolicy,
    /// Layouts tried after `segments`.
    pub alternates: Vec<Layout>,
}

impl FormatDescriptor {
    pub fn new(kind: IdKind, scope: Scope, name: &'static str, segments: Vec<SegmentSpec>) -> Self {
        Self {
            kind,
            scope,
            name,
            segments,
            display_grouping: Grouping::None,
            extra_separators: "",
            prefix: PrefixPolicy::Strict,
            alternates: vec![],
        }
    }

    pub fn grouping(self, display_grouping: Grouping) -> Self {
        Self {
            display_grouping,
            ..self
        }
    }

    pub fn separators(self, extra_separators: &'static str) -> Self {
        Self {
            extra_separators,
            ..self
        }
    }

    pub fn prefix(self, prefix: PrefixPolicy) -> Self {
        Self { prefix, ..self }
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.alternates.push(layout);
        self
    }

    pub fn with_layouts(mut self, layouts: Vec<Layout>) -> Self {
        self.alternates.extend(layouts);
        self
    }

    /// Adds a layout that is generated as well as accepted.
    pub fn alternate(self, segments: Vec<SegmentSpec>) -> Self {
        self.layout(Layout::new(segments))
    }

    /// Adds a layout that is accepted on input but never generated.
    pub fn accepting(self, segments: Vec<SegmentSpec>) -> Self {
        self.layout(Layout::new(segments).accepted_only())
    }

    /// The primary layout followed by the alternates.
    pub fn layouts(&self) -> Vec<LayoutRef<'_>> {
        std::iter::once(LayoutRef {
            segments: &self.segments,
            generated: true,
            grouping: self.display_grouping,
        })
        .chain(self.alternates.iter().map(|layout| LayoutRef {
            segments: &layout.segments,
            generated: layout.generated,
            grouping: layout.grouping.unwrap_or(self.display_grouping),
        }))
        .collect()
    }

    /// Algorithms of the check segments of every layout, in order. Empty when the format
    /// is validated structurally only.
    pub fn checksum_algorithms(&self) -> Vec<&ChecksumAlgorithm> {
        let mut algorithms = vec![];
        for layout in self.layouts() {
            for segment in layout.segments {
                if let SegmentRole::Check(spec) = &segment.role {
                    if !algorithms.contains(&&spec.algorithm) {
                        algorithms.push(&spec.algorithm);
                    }
                }
            }
        }
        algorithms
    }

    /// Length of the primary layout without and with the optional segments.
    pub fn lengths(&self) -> (usize, usize) {
        self.layouts()[0].lengths()
    }

    /// Whether some layout has `length` characters.
    pub fn accepts_length(&self, length: usize) -> bool {
        self.layouts()
            .iter()
            .any(|layout| layout.active(length).is_some())
    }

    pub fn country(&self) -> Option<&str> {
        match &self.scope {
            Scope::Country(code) => Some(code),
            Scope::Brand(_) => None,
        }
    }

    /// Characters dropped from input before validation.
    pub fn is_separator(&self, c: char) -> bool {
        c.is_whitespace()
            || self.extra_separators.contains(c)
            || self.display_grouping.separators().contains(&c)
            || self
                .alternates
                .iter()
                .filter_map(|layout| layout.grouping)
                .any(|grouping| grouping.separators().contains(&c))
    }

    /// The leading literal segment, if the format starts with one.
    pub fn leading_literal(&self) -> Option<&'static str> {
        match self.segments.first().map(|s| &s.role) {
            Some(SegmentRole::Literal(text)) => Some(*text),
            _ => None,
        }
    }

    /// Checks the structural rules every registered descriptor must satisfy.
    pub(crate) fn check_consistency(&self) -> Result<(), String> {
        for (number, layout) in self.layouts().iter().enumerate() {
            self.check_layout(layout)
                .map_err(|err| format!("{} (layout {number}): {err}", self.name))?;
        }
        Ok(())
    }

    fn check_layout(&self, layout: &LayoutRef) -> Result<(), String> {
        let segments = layout.segments;
        if segments.is_empty() {
            return Err("no segments".to_string());
        }
        let last = segments.len() - 1;
        for (index, segment) in segments.iter().enumerate() {
            if segment.optional && index != last {
                return Err("only the last segment may be optional".to_string());
            }
            if segment.length == 0 {
                return Err(format!("segment {index} is empty"));
            }
            match &segment.role {
                SegmentRole::OneOf(options) if options.iter().any(|o| o.len() != segment.length) => {
                    return Err(format!("options of segment {index} differ in length"));
                }
                SegmentRole::Check(spec) => {
                    let covered = spec.cover.indices(index, segments.len());
                    if covered.is_empty()
                        || covered.iter().any(|i| *i >= segments.len() || *i == index)
                    {
                        return Err(format!("check {index} covers itself or nothing"));
                    }
                }
                _ => {}
            }
        }
        match layout.grouping {
            Grouping::Pattern(pattern) => {
                let slots = pattern.chars().filter(|c| *c == '#').count();
                let (required, full) = layout.lengths();
                if slots != required && slots != full {
                    return Err(format!("display pattern has {slots} slots"));
                }
            }
            Grouping::Fields(fields) => {
                if fields.iter().any(|(index, _)| *index >= last) {
                    return Err("display fields past the last segment".to_string());
                }
            }
            Grouping::None | Grouping::Blocks { .. } => {}
        }
        Ok(())
    }
}
