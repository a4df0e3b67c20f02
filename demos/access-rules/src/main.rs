//! Access Rules Demo
//!
//! Grants access to a set of accounts by layering partial rules. Each rule
//! only decides the accounts it knows about and leaves the others to the
//! next rule; a final default closes the gaps.
//!
//! Run with `RUST_LOG=trifilter_core=trace` to see the filter diagnostics.

use std::collections::BTreeMap;

use trifilter::prelude::*;
use tracing::info;

/// An account requesting access.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Account {
    pub name: String,
    pub team: Option<String>,
}

impl Account {
    pub fn new(name: &str, team: Option<&str>) -> Self {
        Account {
            name: name.to_string(),
            team: team.map(str::to_string),
        }
    }
}

fn accounts() -> Vec<Account> {
    vec![
        Account::new("alice", Some("platform")),
        Account::new("bob", Some("sales")),
        Account::new("carol", Some("platform")),
        Account::new("dave", None),
        Account::new("erin", None),
        Account::new("mallory", Some("platform")),
    ]
}

fn main() {
    trifilter::console::init();

    let all = accounts();
    let by_name = |name: &str| all.iter().find(|a| a.name == name).cloned();

    // Team rule: only platform members are in; accounts without a team are
    // not handled here.
    let team_rule = from_predicates(
        |account: &Account| account.team.is_some(),
        |account: &Account| account.team.as_deref() == Some("platform"),
    );

    // Explicit grants and bans take priority over the team rule.
    let grants = by_name("erin");
    let bans = by_name("mallory");
    let access = team_rule
        .plus_all(grants)
        .minus_all(bans)
        .before(from_predicate(|account: &Account| account.name.len() <= 4));

    let strict = (&access).to_predicate();
    for account in &all {
        match strict.test(account) {
            Ok(granted) => info!(account = %account.name, granted, "Access decided"),
            Err(error) => info!(account = %account.name, %error, "Access undecided"),
        }
    }

    let granted: Vec<Account> = match access.apply_to_sequence(all.clone()) {
        Ok(granted) => granted,
        Err(error) => {
            eprintln!("{}", error);
            return;
        }
    };
    println!("Granted:");
    for account in &granted {
        println!("  {}", account.name);
    }

    // Without a default, the team rule alone cannot decide team-less accounts.
    let partial = from_predicates(
        |account: &Account| account.team.is_some(),
        |account: &Account| account.team.as_deref() == Some("platform"),
    );
    let quotas: BTreeMap<Account, u32> = all.iter().cloned().zip([10, 5, 8, 3, 2, 1]).collect();
    match partial.apply_to_map_keys::<u32, _, BTreeMap<_, _>>(quotas.clone()) {
        Ok(kept) => println!("Quotas kept: {}", kept.len()),
        Err(error) => println!("Partial rule failed: {}", error),
    }

    let completed = partial.minus_not_supported();
    match completed.apply_to_map_keys::<u32, _, BTreeMap<_, _>>(quotas) {
        Ok(kept) => {
            println!("Quotas kept:");
            for (account, quota) in kept {
                println!("  {} -> {}", account.name, quota);
            }
        }
        Err(error) => println!("Completed rule failed: {}", error),
    }
}
