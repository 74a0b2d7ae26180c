//! Verification engine: match provider-reported identifiers against the
//! allow-list, then resolve the winner through the identity store.

use pointers_config::AllowList;

use crate::identity::Identity;
use crate::store::{IdentityStore, StoreError};

/// Domain portion of an identifier: everything after the last `@`.
///
/// Identifiers without an `@` have no domain.
pub fn domain_of(identifier: &str) -> Option<&str> {
    identifier.rsplit_once('@').map(|(_, domain)| domain)
}

/// First candidate, in input order, that the allow-list admits.
///
/// A candidate is admitted if it is listed in `users` verbatim or its
/// domain is listed in `domains`. Both rules are checked per candidate, so
/// an earlier domain match beats a later username match.
pub fn find_verified_identifier<'a, S: AsRef<str>>(
    candidates: &'a [S],
    allow_list: &AllowList,
) -> Option<&'a str> {
    candidates.iter().map(AsRef::as_ref).find(|candidate| {
        allow_list.users.iter().any(|user| user == candidate)
            || domain_of(candidate)
                .is_some_and(|domain| allow_list.domains.iter().any(|d| d == domain))
    })
}

/// Verify a set of candidate identifiers.
///
/// - No admitted candidate: `Ok(None)`. This is a refusal, not an error.
/// - Admitted candidate: the store's `find_or_create_user` result, with a
///   store failure returned as-is.
pub async fn verify<S: AsRef<str>>(
    store: &dyn IdentityStore,
    allow_list: &AllowList,
    candidates: &[S],
) -> Result<Option<Identity>, StoreError> {
    let Some(id) = find_verified_identifier(candidates, allow_list) else {
        log::debug!("no candidate identifier is on the allow-list");
        return Ok(None);
    };

    log::debug!("verified {id}");
    let identity = store.find_or_create_user(id).await?;
    Ok(Some(identity))
}
