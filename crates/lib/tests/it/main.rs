/*! Integration tests for FlavorBook.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - backend: Tests for the Storage trait, the JSON record helpers and snapshot files
 * - user: Tests for the SessionManager
 * - recipe: Tests for the RecipeStore and recipe queries
 * - app: Tests for the FlavorBook facade across both managers
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("flavorbook=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod app;
mod helpers;
mod user;
