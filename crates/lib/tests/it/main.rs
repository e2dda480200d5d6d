/*! Integration tests for Trellis.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - contract: Tests for the capability contract defaults (batch towers,
 *   short-circuiting, ordering rules) exercised across container types
 * - container: Tests for the concrete containers (DynArray, BoundedArray,
 *   Stack) and the resize policy observed through them
 * - trie: Tests for the trie node, filter policies and the string-keyed
 *   driver
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("trellis=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod container;
mod contract;
mod trie;
