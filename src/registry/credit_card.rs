use crate::format::{CardBrand, Cover, FormatDescriptor, Grouping, IdKind, Scope, SegmentSpec};
use crate::registry::algorithms::LUHN;
use crate::registry::Registry;

const FOUR_BY_FOUR: Grouping = Grouping::Blocks {
    size: 4,
    separator: ' ',
};

fn number(prefix: SegmentSpec, digits: usize) -> Vec<SegmentSpec> {
    vec![
        prefix,
        SegmentSpec::digits(digits),
        SegmentSpec::check(LUHN, Cover::Preceding),
    ]
}

fn card(brand: CardBrand, name: &'static str, prefix: SegmentSpec, digits: usize) -> FormatDescriptor {
    FormatDescriptor::new(IdKind::CreditCard, Scope::Brand(brand), name, number(prefix, digits))
        .grouping(FOUR_BY_FOUR)
        .separators("-")
}

pub(super) fn register(registry: &mut Registry) {
    registry.register(card(CardBrand::Visa, "Visa", SegmentSpec::literal("4"), 14));
    registry.register(
        card(
            CardBrand::Mastercard,
            "Mastercard",
            SegmentSpec::range(&[(51, 55)], 2),
            13,
        )
        .alternate(number(SegmentSpec::range(&[(2221, 2720)], 4), 11)),
    );
    registry.register(
        card(
            CardBrand::Amex,
            "American Express",
            SegmentSpec::one_of(&["34", "37"]),
            12,
        )
        .grouping(Grouping::Pattern("#### ###### #####")),
    );
    registry.register(
        card(
            CardBrand::Discover,
            "Discover",
            SegmentSpec::literal("6011"),
            11,
        )
        .alternate(number(SegmentSpec::range(&[(644, 649)], 3), 12))
        .alternate(number(SegmentSpec::literal("65"), 13)),
    );
    registry.register(card(
        CardBrand::Jcb,
        "JCB",
        SegmentSpec::range(&[(3528, 3589)], 4),
        11,
    ));
    registry.register(
        card(
            CardBrand::Diners,
            "Diners Club",
            SegmentSpec::literal("36"),
            11,
        )
        .grouping(Grouping::Pattern("#### ###### ####")),
    );
    registry.register(card(
        CardBrand::UnionPay,
        "UnionPay",
        SegmentSpec::literal("62"),
        13,
    ));
}
