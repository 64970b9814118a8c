use crate::format::{FormatDescriptor, Grouping};
use crate::validator::matching_layout;

/// Renders a normalized identifier in the display grouping of `descriptor`, taken from the
/// layout the value matches.
///
/// A value that does not fit a display pattern is returned unchanged.
pub fn format(descriptor: &FormatDescriptor, normalized: &str) -> String {
    let Some((layout, parts)) = matching_layout(descriptor, normalized) else {
        return group(descriptor.display_grouping, normalized, &[]);
    };
    group(layout.grouping, normalized, &parts)
}

fn group(grouping: Grouping, normalized: &str, parts: &[String]) -> String {
    match grouping {
        Grouping::None => normalized.to_string(),
        Grouping::Blocks { size, separator } => {
            if size == 0 {
                return normalized.to_string();
            }
            let chars: Vec<char> = normalized.chars().collect();
            chars
                .chunks(size)
                .map(|chunk| chunk.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join(&separator.to_string())
        }
        Grouping::Pattern(pattern) => {
            let slots = pattern.chars().filter(|c| *c == '#').count();
            if normalized.chars().count() != slots {
                return normalized.to_string();
            }
            let mut chars = normalized.chars();
            pattern
                .chars()
                .filter_map(|p| if p == '#' { chars.next() } else { Some(p) })
                .collect()
        }
        Grouping::Fields(fields) => {
            if parts.is_empty() {
                return normalized.to_string();
            }
            let mut out = String::with_capacity(normalized.len() + fields.len());
            for (index, part) in parts.iter().enumerate() {
                out.push_str(part);
                if let Some((_, text)) = fields.iter().find(|(after, _)| *after == index) {
                    out.push_str(text);
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::format::{IdKind, Layout, Scope, SegmentSpec};

    fn descriptor(grouping: Grouping, length: usize) -> FormatDescriptor {
        FormatDescriptor::new(
            IdKind::PersonalId,
            Scope::country("XX"),
            "test",
            vec![SegmentSpec::digits(length)],
        )
        .grouping(grouping)
    }

    #[test]
    fn blocks() {
        let iban = descriptor(
            Grouping::Blocks {
                size: 4,
                separator: ' ',
            },
            22,
        );
        assert_eq!(
            format(&iban, "DE89370400440532013000"),
            "DE89 3704 0044 0532 0130 00"
        );
        assert_eq!(format(&iban, ""), "");
    }

    #[test]
    fn pattern() {
        let cpf = descriptor(Grouping::Pattern("###.###.###-##"), 11);
        assert_eq!(format(&cpf, "52998224725"), "529.982.247-25");
    }

    #[test]
    fn pattern_mismatch_is_unchanged() {
        let cpf = descriptor(Grouping::Pattern("###.###.###-##"), 11);
        assert_eq!(format(&cpf, "5299822472"), "5299822472");
        assert_eq!(format(&cpf, "529982247250"), "529982247250");
    }

    #[test]
    fn no_grouping() {
        let plain = descriptor(Grouping::None, 9);
        assert_eq!(format(&plain, "123456789"), "123456789");
    }

    #[test]
    fn fields() {
        let account = FormatDescriptor::new(
            IdKind::BankAccount,
            Scope::country("GB"),
            "test",
            vec![
                SegmentSpec::digits(2),
                SegmentSpec::digits(2),
                SegmentSpec::digits(2),
                SegmentSpec::digits(8),
            ],
        )
        .grouping(Grouping::Fields(&[(0, "-"), (1, "-"), (2, " ")]));
        assert_eq!(format(&account, "20000055779911"), "20-00-00 55779911");
        assert_eq!(format(&account, "2000005577991"), "2000005577991");
    }

    #[test]
    fn layouts_bring_their_grouping() {
        let rut = descriptor(Grouping::Pattern("##.###.###-#"), 9).layout(
            Layout::new(vec![SegmentSpec::digits(8)]).grouping(Grouping::Pattern("#.###.###-#")),
        );
        assert_eq!(format(&rut, "123456785"), "12.345.678-5");
        assert_eq!(format(&rut, "76543216"), "7.654.321-6");
    }
}
