mod algorithms;
mod bank_account;
mod company_id;
mod credit_card;
mod driver_license;
mod iban;
mod legal_entity;
mod passport;
mod personal_id;
mod swift;
mod tax_id;
mod vat_id;

pub use bank_account::{account_fields, AccountFields};

use crate::error::IdError;
use crate::format::{CardBrand, FormatDescriptor, IdKind, Scope, SegmentSpec};
use crate::stats::GLOBAL_STATS;
use ahash::AHashMap;
use lazy_static::lazy_static;
use std::collections::BTreeSet;

lazy_static! {
    static ref REGISTRY: Registry = Registry::build();
}

/// Every supported format, keyed by kind and scope. Built on first use and never mutated
/// afterwards.
pub struct Registry {
    descriptors: AHashMap<(IdKind, Scope), FormatDescriptor>,
}

impl Registry {
    fn build() -> Self {
        let mut registry = Registry {
            descriptors: AHashMap::new(),
        };
        iban::register(&mut registry);
        bank_account::register(&mut registry);
        personal_id::register(&mut registry);
        company_id::register(&mut registry);
        vat_id::register(&mut registry);
        tax_id::register(&mut registry);
        passport::register(&mut registry);
        driver_license::register(&mut registry);
        swift::register(&mut registry);
        legal_entity::register(&mut registry);
        credit_card::register(&mut registry);
        GLOBAL_STATS.set_registry_descriptors(registry.descriptors.len());
        registry
    }

    /// Adds a descriptor. The tables are static data, so a duplicate key or an
    /// inconsistent layout is a bug in them and aborts construction.
    fn register(&mut self, descriptor: FormatDescriptor) {
        if let Err(reason) = descriptor.check_consistency() {
            panic!("inconsistent {} descriptor: {reason}", descriptor.kind);
        }
        let key = (descriptor.kind, descriptor.scope.clone());
        if self.descriptors.contains_key(&key) {
            panic!("{} is registered twice for {}", key.0, key.1);
        }
        self.descriptors.insert(key, descriptor);
    }

    fn register_country(
        &mut self,
        kind: IdKind,
        country: &'static str,
        name: &'static str,
        segments: Vec<SegmentSpec>,
    ) {
        self.register(FormatDescriptor::new(kind, Scope::country(country), name, segments));
    }
}

/// The descriptor of `kind` for `country`, matched case-insensitively.
pub fn lookup(kind: IdKind, country: &str) -> Result<&'static FormatDescriptor, IdError> {
    REGISTRY
        .descriptors
        .get(&(kind, Scope::country(country)))
        .ok_or_else(|| IdError::UnsupportedFormat {
            kind,
            country: country.to_string(),
        })
}

pub fn card(brand: CardBrand) -> Result<&'static FormatDescriptor, IdError> {
    REGISTRY
        .descriptors
        .get(&(IdKind::CreditCard, Scope::Brand(brand)))
        .ok_or_else(|| IdError::UnsupportedFormat {
            kind: IdKind::CreditCard,
            country: brand.to_string(),
        })
}

pub fn supported_countries(kind: IdKind) -> BTreeSet<String> {
    REGISTRY
        .descriptors
        .keys()
        .filter(|(k, _)| *k == kind)
        .filter_map(|(_, scope)| match scope {
            Scope::Country(code) => Some(code.clone()),
            Scope::Brand(_) => None,
        })
        .collect()
}

/// All registered descriptors, in no particular order.
pub fn descriptors() -> impl Iterator<Item = &'static FormatDescriptor> {
    REGISTRY.descriptors.values()
}
