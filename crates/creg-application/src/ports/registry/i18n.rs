//! I18N DAO Registration Slices

use crate::component::registration::{Registration, list_registrations};
use creg_domain::ports::{I18nDao, I18nDaoFactory};

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static I18N_DAOS: [Registration<dyn I18nDao>] = [..];

#[linkme::distributed_slice]
pub static I18N_DAO_FACTORIES: [Registration<dyn I18nDaoFactory>] = [..];

/// List all registered I18N DAOs and DAO factories
///
/// Returns `(name, description)` pairs for diagnostics and the CLI.
pub fn list_i18n_registrations() -> Vec<(&'static str, &'static str)> {
    let mut registrations = list_registrations(&I18N_DAOS);
    registrations.extend(list_registrations(&I18N_DAO_FACTORIES));
    registrations
}
