//! Canned site content and test logging

use crate::demo::Demo;
use crate::error::FixtureError;
use crate::site::Site;

/// Number of objects `content_setup` adds
pub const CONTENT_OBJECT_COUNT: usize = 30;

/// Objects `chinatown_setup` adds, in insertion order
pub const CHINATOWN_CHARACTERS: [&str; 7] = [
    "jake",
    "evelyn",
    "noah",
    "hollis",
    "katherine",
    "the past",
    "investigation",
];

/// Add `ob0` through `ob29`
pub fn content_setup(site: &mut Site) -> Result<(), FixtureError> {
    for i in 0..CONTENT_OBJECT_COUNT {
        site.add(Demo::new(format!("ob{}", i)))?;
    }
    Ok(())
}

/// Add the Chinatown cast
pub fn chinatown_setup(site: &mut Site) -> Result<(), FixtureError> {
    for name in CHINATOWN_CHARACTERS {
        site.add(Demo::new(name))?;
    }
    Ok(())
}

/// Fresh site with test logging enabled and `content_setup` applied
///
/// Dropping the site is the teardown.
pub fn set_up() -> Result<Site, FixtureError> {
    init_test_tracing();
    let mut site = Site::new();
    content_setup(&mut site)?;
    tracing::debug!(objects = site.len(), "site set up");
    Ok(site)
}

/// Route `tracing` output to the test harness
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
