use crate::format::{Cover, FormatDescriptor, Grouping, IdKind, Scope, SegmentSpec};
use crate::registry::algorithms::*;
use crate::registry::personal_id::{bsn, codice_fiscale, cpf, dni};
use crate::registry::Registry;

fn tax(country: &'static str, name: &'static str, segments: Vec<SegmentSpec>) -> FormatDescriptor {
    FormatDescriptor::new(IdKind::TaxId, Scope::country(country), name, segments)
}

pub(super) fn register(registry: &mut Registry) {
    registry.register(tax(
        "DE",
        "Steuerliche Identifikationsnummer",
        vec![
            SegmentSpec::range(&[(1, 9)], 1),
            SegmentSpec::digits(9),
            SegmentSpec::check(MOD_11_10, Cover::Preceding),
        ],
    ));
    registry.register(
        tax(
            "FR",
            "Numéro fiscal",
            vec![
                SegmentSpec::range(&[(0, 3)], 1),
                SegmentSpec::digits(9),
                SegmentSpec::check(FR_NIF, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Pattern("## ## ### ### ###")),
    );
    registry.register(tax(
        "IN",
        "PAN",
        vec![
            SegmentSpec::letters(3),
            // holder type: company, person, firm...
            SegmentSpec::charset("ABCFGHLJPT", 1),
            SegmentSpec::letters(1),
            SegmentSpec::digits(4),
            SegmentSpec::letters(1),
        ],
    ));
    registry.register(
        tax(
            "US",
            "ITIN",
            vec![
                SegmentSpec::literal("9"),
                SegmentSpec::digits(2),
                SegmentSpec::range(&[(50, 65), (70, 88), (90, 92), (94, 99)], 2),
                SegmentSpec::digits(4),
            ],
        )
        .grouping(Grouping::Pattern("###-##-####")),
    );
    registry.register(
        tax(
            "PL",
            "NIP",
            vec![
                SegmentSpec::range(&[(1, 9)], 1),
                SegmentSpec::digits(8),
                SegmentSpec::check(PL_NIP, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Pattern("###-###-##-##")),
    );
    registry.register(tax(
        "HU",
        "Adóazonosító jel",
        vec![
            SegmentSpec::literal("8"),
            SegmentSpec::digits(8),
            SegmentSpec::check(HU_TAX_NUMBER, Cover::Preceding),
        ],
    ));
    registry.register(tax(
        "GR",
        "AFM",
        vec![
            SegmentSpec::digits(8),
            SegmentSpec::check(GR_AFM, Cover::Preceding),
        ],
    ));
    registry.register(tax(
        "SI",
        "Davčna številka",
        vec![
            SegmentSpec::range(&[(1, 9)], 1),
            SegmentSpec::digits(6),
            SegmentSpec::check(SI_TAX_NUMBER, Cover::Preceding),
        ],
    ));
    registry.register(tax("IT", "Codice Fiscale", codice_fiscale()));
    registry.register(tax("ES", "NIF", dni()));
    registry.register(tax("BR", "CPF", cpf()).grouping(Grouping::Pattern("###.###.###-##")));
    registry.register(tax(
        "PT",
        "NIF",
        vec![
            SegmentSpec::one_of(&["1", "2", "3"]),
            SegmentSpec::digits(7),
            SegmentSpec::check(PT_NIF, Cover::Preceding),
        ],
    ));
    registry.register(
        tax(
            "AU",
            "Tax File Number",
            vec![
                SegmentSpec::digits(8),
                SegmentSpec::check(AU_TFN, Cover::Preceding),
            ],
        )
        .grouping(Grouping::Pattern("### ### ###")),
    );
    registry.register(tax("NL", "RSIN", bsn()));
}
