//! LiteSVM fixture for exercising the airdrop programs end to end.

mod test_fixture;

pub use test_fixture::*;

use litesvm::LiteSVM;
use solana_pubkey::Pubkey;
use std::path::PathBuf;

/// `(program id, binary name in target/deploy)` for every program in the workspace.
pub fn workspace_programs() -> [(Pubkey, &'static str); 6] {
    [
        (airdrop::ID, "airdrop"),
        (basic_verifier::ID, "basic_verifier"),
        (password_verifier::ID, "password_verifier"),
        (merkle_verifier::ID, "merkle_verifier"),
        (governance_verifier::ID, "governance_verifier"),
        (orca_verifier::ID, "orca_verifier"),
    ]
}

pub fn deploy_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("target")
        .join("deploy")
}

pub fn load_programs(svm: &mut LiteSVM) {
    let deploy_dir = deploy_dir();
    for (program_id, name) in workspace_programs() {
        let path = deploy_dir.join(format!("{name}.so"));
        svm.add_program_from_file(program_id, &path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {e}", path.display()));
    }
}

/// Anchor custom error code as it appears in `InstructionError::Custom`.
pub fn error_code(code: impl Into<u32>) -> u32 {
    code.into()
}
