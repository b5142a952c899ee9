//! Poll a node and log what a node dashboard would show: the overview with
//! its health checks, and the bakers of the current epoch. Optionally look up
//! an account once at startup.
use anyhow::{bail, Context};
use clap::AppSettings;
use concordium_node_monitor::{
    constants::DEFAULT_RPC_TOKEN,
    endpoints::Endpoint,
    format::*,
    monitor::{self, BirkCache, IdentityProviderCache},
    token_cache,
    types::AccountAddress,
    v1,
};
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::Level;

#[derive(StructOpt)]
struct App {
    #[structopt(
        long = "node",
        help = "GRPC interface of the node.",
        default_value = "http://localhost:10000",
        env = "NODE_URL"
    )]
    endpoint:    Endpoint,
    #[structopt(
        long = "token",
        help = "Authentication token of the node. Defaults to the cached token, or `rpcadmin`.",
        env = "GRPC_AUTHENTICATION_TOKEN"
    )]
    token:       Option<String>,
    #[structopt(
        long = "token-cache",
        help = "File where the token is stored once the node has accepted it."
    )]
    token_cache: Option<PathBuf>,
    #[structopt(
        long = "interval",
        help = "Seconds between polls of the node.",
        default_value = "10"
    )]
    interval:    u64,
    #[structopt(long = "account", help = "Account to look up at startup.")]
    account:     Option<AccountAddress>,
    #[structopt(long = "log-level", help = "Maximum log level.", default_value = "info")]
    log_level:   Level,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let app = {
        let app = App::clap().global_setting(AppSettings::ColoredHelp);
        let matches = app.get_matches();
        App::from_clap(&matches)
    };

    {
        use tracing_subscriber::prelude::*;
        let log_filter =
            tracing_subscriber::filter::Targets::new().with_target("node_monitor", app.log_level);
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(log_filter)
            .init();
    }

    let token = match (&app.token, &app.token_cache) {
        (Some(token), _) => token.clone(),
        (None, Some(path)) => token_cache::load(path)
            .context("Cannot read the token cache.")?
            .unwrap_or_else(|| DEFAULT_RPC_TOKEN.to_string()),
        (None, None) => DEFAULT_RPC_TOKEN.to_string(),
    };

    let mut client = v1::Client::new(app.endpoint, &token)
        .await
        .context("Cannot connect.")?;
    match client.check_connection().await {
        Ok(()) => {
            if let Some(path) = &app.token_cache {
                token_cache::save(path, &token).context("Cannot save the token.")?;
            }
        }
        Err(e) if e.is_unauthenticated() => {
            bail!("The node rejected the authentication token.")
        }
        Err(e) => return Err(e).context("Cannot reach the node."),
    }
    tracing::info!("Connected to the node.");

    if let Some(address) = &app.account {
        log_account(&mut client, address).await?;
    }

    let mut birk_cache = BirkCache::new();
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(app.interval.max(1)));
    loop {
        interval.tick().await;
        let now = chrono::Utc::now();
        match monitor::poll_overview(&mut client, &mut birk_cache, now).await {
            Ok(overview) => log_overview(&overview, now),
            Err(e) => tracing::warn!("Could not poll the overview: {e}"),
        }
        match monitor::poll_consensus(&mut client, &mut birk_cache, now).await {
            Ok(consensus) => log_consensus(&consensus),
            Err(e) => tracing::warn!("Could not poll consensus: {e}"),
        }
    }
}

fn log_overview(overview: &monitor::Overview, now: chrono::DateTime<chrono::Utc>) {
    let node = &overview.node;
    let consensus = &overview.consensus;
    tracing::info!(
        "Node {} version {}, up for {}.",
        node.node_id.as_deref().unwrap_or("<unknown>"),
        overview.peer.version,
        format_duration(overview.peer.uptime, true)
    );
    tracing::info!(
        "{} peers, {} banned. In: {}, out: {}.",
        overview.peers.peers.len(),
        overview.peers.banned.len(),
        format_bytes(overview.peers.avg_bps_in),
        format_bytes(overview.peers.avg_bps_out)
    );
    for peer in &overview.peers.peers {
        tracing::debug!(
            "Peer {} at {}: {}, latency {}.",
            peer.node_id.as_deref().unwrap_or("<unknown>"),
            peer.address,
            peer.status,
            peer.stats
                .map_or_else(|| "unknown".to_string(), |s| format_latency(s.latency))
        );
    }
    tracing::info!(
        "Best block {} at height {}, last finalized {}.",
        consensus.best_block,
        consensus.best_block_height,
        consensus
            .last_finalized_time
            .map_or_else(|| "never".to_string(), format_date)
    );
    tracing::info!(
        "Baking: {}. Finalizer: {}.",
        format_baking_status(node.baking_committee, consensus.epoch_duration),
        format_bool(node.in_finalizer_committee)
    );
    if let Some(baker) = &overview.baker {
        if let (Some(lottery_power), Some(rate)) = (baker.lottery_power, baker.block_rate) {
            tracing::info!(
                "Baker {} has lottery power {} and expects {rate}.",
                baker.baker_id,
                format_percentage(lottery_power)
            );
        }
        let account_baker = baker.account.as_ref().and_then(|a| a.account_baker.as_ref());
        if let Some(account_baker) = account_baker {
            tracing::info!("Staked amount {}.", format_amount(&account_baker.staked_amount));
            if let Some(change) = &account_baker.pending_change {
                tracing::info!(
                    "{}.",
                    format_pending_change(change, consensus.epoch_duration, consensus.genesis_time)
                );
            }
        }
    }
    for group in overview.health_checks(now) {
        for error in group.errors() {
            tracing::warn!("{}: {error}", group.header);
        }
    }
}

fn log_consensus(consensus: &monitor::ConsensusOverview) {
    tracing::info!(
        "Epoch {}, {} active bakers.",
        consensus
            .epoch
            .map_or_else(|| "unknown".to_string(), |e| e.to_string()),
        consensus.bakers.len()
    );
    for baker in &consensus.bakers {
        tracing::debug!(
            "Baker {}{} ({}): {} lottery power, {}.",
            baker.baker_id,
            if baker.is_this_node { " (this node)" } else { "" },
            baker.account,
            format_percentage(baker.lottery_power),
            baker
                .block_rate
                .map_or_else(|| "unknown block rate".to_string(), |r| r.to_string())
        );
    }
}

async fn log_account(client: &mut v1::Client, address: &AccountAddress) -> anyhow::Result<()> {
    let mut ip_cache = IdentityProviderCache::new();
    let Some(lookup) = monitor::lookup_account(client, &mut ip_cache, address, None)
        .await
        .context("Cannot look up the account.")?
    else {
        tracing::warn!("Account {address} does not exist in the best block.");
        return Ok(());
    };
    let account = &lookup.account;
    tracing::info!(
        "Account {address} in block {}: balance {}, nonce {}.",
        lookup.block_hash,
        format_amount(&account.account_amount),
        account.account_nonce
    );
    if !account.account_release_schedule.total.is_zero() {
        tracing::info!(
            "Locked in releases: {}.",
            format_amount(&account.account_release_schedule.total)
        );
        for release in &account.account_release_schedule.schedule {
            tracing::info!(
                "  {} at {}.",
                format_amount(&release.amount),
                format_date(release.timestamp)
            );
        }
    }
    for (index, credential) in &account.account_credentials {
        let policy = &credential.value.contents.policy;
        let issuer = lookup
            .issuers
            .get(index)
            .and_then(|ip| ip.as_ref())
            .map_or("an unknown identity provider", |ip| {
                ip.ip_description.name.as_str()
            });
        tracing::info!(
            "Credential {index} issued by {issuer}, valid from {} to {}.",
            format_year_month(policy.created_at),
            format_year_month(policy.valid_to)
        );
    }
    Ok(())
}
