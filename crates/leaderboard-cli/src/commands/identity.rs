//! Identity commands.

use anyhow::Result;
use leaderboard_core::IdentityStore;

pub fn whoami(identity: &IdentityStore) -> Result<()> {
    println!("{}", identity.current_user_id());
    Ok(())
}

pub fn reset(identity: &IdentityStore) -> Result<()> {
    let previous = identity.current_user_id();
    let id = identity.reset();
    println!("User id changed: {} -> {}", previous, id);
    Ok(())
}
