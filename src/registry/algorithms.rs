use crate::checksum::{CheckEncoding, CheckTransform, ChecksumAlgorithm, Weights};

/// Mod-11 values where 10 folds back to 0.
pub(super) const MOD11_DIGITS: &str = "01234567890";

const ONE_DIGIT: CheckEncoding = CheckEncoding::Decimal { width: 1 };
const TWO_DIGITS: CheckEncoding = CheckEncoding::Decimal { width: 2 };

pub(super) const LUHN: ChecksumAlgorithm = ChecksumAlgorithm::LuhnMod10;
pub(super) const MOD_11_10: ChecksumAlgorithm = ChecksumAlgorithm::Iso7064Mod11_10;

const fn weighted(
    weights: &'static [u32],
    modulus: u32,
    transform: CheckTransform,
    encoding: CheckEncoding,
) -> ChecksumAlgorithm {
    ChecksumAlgorithm::WeightedModN {
        weights: Weights::Fixed(weights),
        modulus,
        transform,
        encoding,
    }
}

/// `11 - (sum mod 11)`, where 11 means 0 and 10 cannot be written.
const fn mod11_complement(weights: &'static [u32]) -> ChecksumAlgorithm {
    weighted(weights, 11, CheckTransform::Complement, ONE_DIGIT)
}

/// `sum mod 11`, where 10 cannot be written.
const fn mod11_remainder(weights: &'static [u32]) -> ChecksumAlgorithm {
    weighted(weights, 11, CheckTransform::Remainder, ONE_DIGIT)
}

const fn mod11_table(weights: &'static [u32], table: &'static str) -> ChecksumAlgorithm {
    ChecksumAlgorithm::TableLookup {
        weights: Weights::Fixed(weights),
        modulus: 11,
        table,
    }
}

const fn mod10_complement(weights: &'static [u32]) -> ChecksumAlgorithm {
    weighted(weights, 10, CheckTransform::Complement, ONE_DIGIT)
}

// ICAO 9303 machine readable zone digit
pub(super) const ICAO_9303: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: Weights::Cycle(&[7, 3, 1]),
    modulus: 10,
    transform: CheckTransform::Remainder,
    encoding: ONE_DIGIT,
};

const BR_CPF_FIRST: ChecksumAlgorithm = weighted(
    &[10, 9, 8, 7, 6, 5, 4, 3, 2],
    11,
    CheckTransform::Complement,
    CheckEncoding::Table(MOD11_DIGITS),
);
const BR_CPF_SECOND: ChecksumAlgorithm = weighted(
    &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2],
    11,
    CheckTransform::Complement,
    CheckEncoding::Table(MOD11_DIGITS),
);
pub(super) const BR_CPF: ChecksumAlgorithm = ChecksumAlgorithm::Cascade(&[BR_CPF_FIRST, BR_CPF_SECOND]);

const BR_CNPJ_FIRST: ChecksumAlgorithm = weighted(
    &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    11,
    CheckTransform::Complement,
    CheckEncoding::Table(MOD11_DIGITS),
);
const BR_CNPJ_SECOND: ChecksumAlgorithm = weighted(
    &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    11,
    CheckTransform::Complement,
    CheckEncoding::Table(MOD11_DIGITS),
);
pub(super) const BR_CNPJ: ChecksumAlgorithm =
    ChecksumAlgorithm::Cascade(&[BR_CNPJ_FIRST, BR_CNPJ_SECOND]);

pub(super) const ES_DNI: ChecksumAlgorithm = ChecksumAlgorithm::TableLookup {
    weights: Weights::Positional,
    modulus: 23,
    table: "TRWAGMYFPDXBNJZSQVHLCKE",
};

pub(super) const PL_PESEL: ChecksumAlgorithm = mod10_complement(&[1, 3, 7, 9, 1, 3, 7, 9, 1, 3]);

pub(super) const BALTIC_PERSONAL_CODE: ChecksumAlgorithm = ChecksumAlgorithm::Mod11TwoPass {
    primary: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 1],
    secondary: &[3, 4, 5, 6, 7, 8, 9, 1, 2, 3],
};

pub(super) const EE_REGISTRY_CODE: ChecksumAlgorithm = ChecksumAlgorithm::Mod11TwoPass {
    primary: &[1, 2, 3, 4, 5, 6, 7],
    secondary: &[3, 4, 5, 6, 7, 8, 9],
};

pub(super) const FI_HETU: ChecksumAlgorithm = ChecksumAlgorithm::TableLookup {
    weights: Weights::Positional,
    modulus: 31,
    table: "0123456789ABCDEFHJKLMNPRSTUVWXY",
};

/// `97 - (number mod 97)`, as two digits.
pub(super) const MOD97_COMPLEMENT: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: Weights::Positional,
    modulus: 97,
    transform: CheckTransform::ComplementRaw,
    encoding: TWO_DIGITS,
};

pub(super) const NL_ELEVEN_TEST: ChecksumAlgorithm = mod11_remainder(&[9, 8, 7, 6, 5, 4, 3, 2]);

pub(super) const CN_RESIDENT_ID: ChecksumAlgorithm = mod11_table(
    &[7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2],
    "10X98765432",
);

const TR_ODD_EVEN: ChecksumAlgorithm = weighted(
    &[7, 9, 7, 9, 7, 9, 7, 9, 7],
    10,
    CheckTransform::Remainder,
    ONE_DIGIT,
);
const TR_DIGIT_SUM: ChecksumAlgorithm = weighted(
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    10,
    CheckTransform::Remainder,
    ONE_DIGIT,
);
pub(super) const TR_IDENTITY: ChecksumAlgorithm =
    ChecksumAlgorithm::Cascade(&[TR_ODD_EVEN, TR_DIGIT_SUM]);

pub(super) const RO_CNP: ChecksumAlgorithm =
    mod11_table(&[2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9], "01234567891");

pub(super) const CL_RUT: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: Weights::CycleFromRight(&[2, 3, 4, 5, 6, 7]),
    modulus: 11,
    transform: CheckTransform::Complement,
    encoding: CheckEncoding::Table("0123456789K"),
};

const NO_FIRST_CONTROL: ChecksumAlgorithm = mod11_complement(&[3, 7, 6, 1, 8, 9, 4, 5, 2]);
const NO_SECOND_CONTROL: ChecksumAlgorithm = mod11_complement(&[5, 4, 3, 2, 7, 6, 5, 4, 3, 2]);
pub(super) const NO_BIRTH_NUMBER: ChecksumAlgorithm =
    ChecksumAlgorithm::Cascade(&[NO_FIRST_CONTROL, NO_SECOND_CONTROL]);

pub(super) const IS_KENNITALA: ChecksumAlgorithm = mod11_complement(&[3, 2, 7, 6, 5, 4, 3, 2]);

pub(super) const CZ_BIRTH_NUMBER: ChecksumAlgorithm = ChecksumAlgorithm::TableLookup {
    weights: Weights::Positional,
    modulus: 11,
    table: MOD11_DIGITS,
};

pub(super) const DK_CVR: ChecksumAlgorithm = mod11_complement(&[2, 7, 6, 5, 4, 3, 2]);

pub(super) const FI_BUSINESS_ID: ChecksumAlgorithm = mod11_complement(&[7, 9, 10, 5, 8, 4, 2]);

pub(super) const NO_ORGANISATION: ChecksumAlgorithm = mod11_complement(&[3, 2, 7, 6, 5, 4, 3, 2]);

pub(super) const PL_REGON: ChecksumAlgorithm = mod11_table(&[8, 9, 2, 3, 4, 5, 6, 7], MOD11_DIGITS);

pub(super) const PL_NIP: ChecksumAlgorithm = mod11_remainder(&[6, 5, 7, 2, 3, 4, 5, 6, 7]);

pub(super) const CH_UID: ChecksumAlgorithm = mod11_complement(&[5, 4, 3, 2, 7, 6, 5, 4]);

/// `(12 + 3 * (SIREN mod 97)) mod 97`, with the powers of ten folded into the weights.
pub(super) const FR_VAT_KEY: ChecksumAlgorithm = weighted(
    &[49, 34, 81, 76, 27, 90, 9, 30, 3],
    97,
    CheckTransform::Offset(12),
    TWO_DIGITS,
);

pub(super) const GB_VAT: ChecksumAlgorithm = weighted(
    &[8, 7, 6, 5, 4, 3, 2],
    97,
    CheckTransform::ComplementRaw,
    TWO_DIGITS,
);

pub(super) const EE_VAT: ChecksumAlgorithm = mod10_complement(&[3, 7, 1, 3, 7, 1, 3, 7]);

pub(super) const LU_VAT: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: Weights::Positional,
    modulus: 89,
    transform: CheckTransform::Remainder,
    encoding: TWO_DIGITS,
};

pub(super) const HU_VAT: ChecksumAlgorithm = mod10_complement(&[9, 7, 3, 1, 9, 7, 3]);

pub(super) const HU_TAX_NUMBER: ChecksumAlgorithm = mod11_remainder(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);

pub(super) const GR_AFM: ChecksumAlgorithm =
    mod11_table(&[256, 128, 64, 32, 16, 8, 4, 2], MOD11_DIGITS);

pub(super) const SI_TAX_NUMBER: ChecksumAlgorithm = weighted(
    &[8, 7, 6, 5, 4, 3, 2],
    11,
    CheckTransform::ComplementRaw,
    CheckEncoding::Table(MOD11_DIGITS),
);

pub(super) const PT_NIF: ChecksumAlgorithm = weighted(
    &[9, 8, 7, 6, 5, 4, 3, 2],
    11,
    CheckTransform::Complement,
    CheckEncoding::Table(MOD11_DIGITS),
);

pub(super) const AU_TFN: ChecksumAlgorithm = mod11_remainder(&[1, 4, 3, 7, 5, 8, 6, 9]);

pub(super) const FR_NIF: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: Weights::Positional,
    modulus: 511,
    transform: CheckTransform::Remainder,
    encoding: CheckEncoding::Decimal { width: 3 },
};

/// Belgian national numbers of people born after 1999 are checked with a `2` in front.
pub(super) const BE_BORN_AFTER_1999: ChecksumAlgorithm =
    ChecksumAlgorithm::Prefixed("2", &MOD97_COMPLEMENT);

pub(super) const AT_VAT: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: Weights::DigitSum(&[1, 2, 1, 2, 1, 2, 1]),
    modulus: 10,
    transform: CheckTransform::ComplementOffset(4),
    encoding: ONE_DIGIT,
};

pub(super) const BG_VAT: ChecksumAlgorithm = ChecksumAlgorithm::Mod11TwoPass {
    primary: &[1, 2, 3, 4, 5, 6, 7, 8],
    secondary: &[3, 4, 5, 6, 7, 8, 9, 10],
};

pub(super) const BG_EGN: ChecksumAlgorithm = weighted(
    &[2, 4, 8, 5, 10, 9, 7, 3, 6],
    11,
    CheckTransform::Remainder,
    CheckEncoding::Table(MOD11_DIGITS),
);

pub(super) const CZ_VAT: ChecksumAlgorithm = mod11_table(&[8, 7, 6, 5, 4, 3, 2], "10987654321");

const IE_LETTERS: &str = "WABCDEFGHIJKLMNOPQRSTUV";

pub(super) const IE_VAT: ChecksumAlgorithm = ChecksumAlgorithm::TableLookup {
    weights: Weights::Fixed(&[8, 7, 6, 5, 4, 3, 2]),
    modulus: 23,
    table: IE_LETTERS,
};

/// The second letter weighs 9 with `A` as 1. Letters are valued from 10 upwards, the
/// offset takes the difference back out.
pub(super) const IE_VAT_TWO_LETTERS: ChecksumAlgorithm = weighted(
    &[8, 7, 6, 5, 4, 3, 2, 9],
    23,
    CheckTransform::Offset(11),
    CheckEncoding::Table(IE_LETTERS),
);

pub(super) const LT_VAT: ChecksumAlgorithm = ChecksumAlgorithm::Mod11TwoPass {
    primary: &[1, 2, 3, 4, 5, 6, 7, 8],
    secondary: &[3, 4, 5, 6, 7, 8, 9, 1],
};

pub(super) const LT_VAT_TEMPORARY: ChecksumAlgorithm = ChecksumAlgorithm::Mod11TwoPass {
    primary: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2],
    secondary: &[3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4],
};

/// The weighted sum of all eleven digits, the check weighing 1, leaves 3 mod 11.
pub(super) const LV_VAT: ChecksumAlgorithm = weighted(
    &[9, 1, 4, 8, 3, 10, 2, 5, 7, 6],
    11,
    CheckTransform::ComplementOffset(8),
    ONE_DIGIT,
);

pub(super) const MT_VAT: ChecksumAlgorithm =
    weighted(&[3, 4, 6, 7, 8, 9], 37, CheckTransform::ComplementRaw, TWO_DIGITS);

static RO_VAT_WEIGHTS: [u32; 9] = [7, 5, 3, 2, 1, 7, 5, 3, 2];

/// Romanian CUI check over `payload` digits, 1 to 9, weighted from the right.
pub(super) fn ro_vat(payload: usize) -> ChecksumAlgorithm {
    let start = RO_VAT_WEIGHTS.len().saturating_sub(payload);
    weighted(
        &RO_VAT_WEIGHTS[start..],
        11,
        CheckTransform::Complement,
        CheckEncoding::Table(MOD11_DIGITS),
    )
}

/// The whole ten-digit number is divisible by 11.
pub(super) const SK_VAT: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: Weights::Positional,
    modulus: 11,
    transform: CheckTransform::Remainder,
    encoding: ONE_DIGIT,
};

/// `97 - (sum mod 97)` written as `00` when the sum divides evenly.
pub(super) const GB_VAT_ZERO: ChecksumAlgorithm =
    weighted(&[8, 7, 6, 5, 4, 3, 2], 97, CheckTransform::Complement, TWO_DIGITS);

/// Numbers issued from 2010 add 55 before the remainder.
pub(super) const GB_VAT_9755: ChecksumAlgorithm = weighted(
    &[8, 7, 6, 5, 4, 3, 2],
    97,
    CheckTransform::ComplementOffset(55),
    TWO_DIGITS,
);

const ES_CIF_WEIGHTS: Weights = Weights::DigitSum(&[2, 1, 2, 1, 2, 1, 2]);

pub(super) const ES_CIF_DIGIT: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: ES_CIF_WEIGHTS,
    modulus: 10,
    transform: CheckTransform::Complement,
    encoding: ONE_DIGIT,
};

pub(super) const ES_CIF_LETTER: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: ES_CIF_WEIGHTS,
    modulus: 10,
    transform: CheckTransform::Complement,
    encoding: CheckEncoding::Table("JABCDEFGHI"),
};

pub(super) const ES_NIE_X: ChecksumAlgorithm = ChecksumAlgorithm::Prefixed("0", &ES_DNI);
pub(super) const ES_NIE_Y: ChecksumAlgorithm = ChecksumAlgorithm::Prefixed("1", &ES_DNI);
pub(super) const ES_NIE_Z: ChecksumAlgorithm = ChecksumAlgorithm::Prefixed("2", &ES_DNI);

/// AFM written without its leading zero.
pub(super) const GR_AFM_SHORT: ChecksumAlgorithm =
    mod11_table(&[128, 64, 32, 16, 8, 4, 2], MOD11_DIGITS);

pub(super) const NO_ACCOUNT: ChecksumAlgorithm = NO_SECOND_CONTROL;

pub(super) const EE_ACCOUNT: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: Weights::Cycle(&[7, 1, 3]),
    modulus: 10,
    transform: CheckTransform::Complement,
    encoding: ONE_DIGIT,
};

pub(super) const BE_ACCOUNT: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: Weights::Positional,
    modulus: 97,
    transform: CheckTransform::RemainderOrModulus,
    encoding: TWO_DIGITS,
};

pub(super) const PL_BANK: ChecksumAlgorithm = mod10_complement(&[3, 9, 7, 1, 3, 9, 7]);

pub(super) const ES_BANK_BRANCH: ChecksumAlgorithm = weighted(
    &[4, 8, 5, 10, 9, 7, 3, 6],
    11,
    CheckTransform::Complement,
    CheckEncoding::Table("01234567891"),
);

pub(super) const ES_ACCOUNT: ChecksumAlgorithm = weighted(
    &[1, 2, 4, 8, 5, 10, 9, 7, 3, 6],
    11,
    CheckTransform::Complement,
    CheckEncoding::Table("01234567891"),
);

pub(super) const CZ_ACCOUNT_PREFIX: ChecksumAlgorithm = mod11_complement(&[10, 5, 8, 4, 2]);

pub(super) const CZ_ACCOUNT_NUMBER: ChecksumAlgorithm =
    mod11_complement(&[6, 3, 7, 9, 10, 5, 8, 4, 2]);

pub(super) const HU_ACCOUNT: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: Weights::Cycle(&[9, 7, 3, 1]),
    modulus: 10,
    transform: CheckTransform::Complement,
    encoding: ONE_DIGIT,
};

// domestic account numbers

/// ABA routing number: 3-7-1 weights, the check completes the sum to a multiple of 10.
pub(super) const ABA_ROUTING: ChecksumAlgorithm = mod10_complement(&[3, 7, 1, 3, 7, 1, 3, 7]);

pub(super) const MX_CLABE: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: Weights::UnitDigit(&[3, 7, 1]),
    modulus: 10,
    transform: CheckTransform::Complement,
    encoding: ONE_DIGIT,
};

/// Both CBU blocks weigh 3-1-7-9 from their last digit.
pub(super) const AR_CBU: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: Weights::CycleFromRight(&[3, 1, 7, 9]),
    modulus: 10,
    transform: CheckTransform::Complement,
    encoding: ONE_DIGIT,
};

pub(super) const NG_NUBAN: ChecksumAlgorithm = mod10_complement(&[3, 7, 3, 3, 7, 3, 3, 7, 3]);

pub(super) const BR_AGENCY: ChecksumAlgorithm =
    weighted(&[5, 4, 3, 2], 11, CheckTransform::Complement, CheckEncoding::Table(MOD11_DIGITS));

/// Weights 2, 3, 4... from the last digit of the account number.
pub(super) const BR_ACCOUNT: ChecksumAlgorithm = ChecksumAlgorithm::WeightedModN {
    weights: Weights::CycleFromRight(&[2, 3, 4, 5, 6, 7, 8, 9, 10, 11]),
    modulus: 11,
    transform: CheckTransform::Complement,
    encoding: CheckEncoding::Table(MOD11_DIGITS),
};

// New Zealand accounts are valid when the weighted sum of the whole number is a multiple
// of the modulus. The last account digit has weight 1, so it acts as the check digit.

/// Branch and account. Used below account 0990000.
pub(super) const NZ_BRANCH_ACCOUNT: ChecksumAlgorithm =
    mod11_complement(&[6, 3, 7, 9, 0, 10, 5, 8, 4, 2]);
/// Account only, from account 0990000 on.
pub(super) const NZ_HIGH_ACCOUNT: ChecksumAlgorithm = mod11_complement(&[0, 10, 5, 8, 4, 2]);
pub(super) const NZ_ACCOUNT_11: ChecksumAlgorithm = mod11_complement(&[7, 6, 5, 4, 3, 2]);
pub(super) const NZ_ACCOUNT_10: ChecksumAlgorithm = mod10_complement(&[1, 7, 3, 1, 7, 3]);
