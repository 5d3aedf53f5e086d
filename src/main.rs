use anyhow::{Context, Result};
use moacrpc::libs::config::Config;
use moacrpc::libs::moac::spells::{format_moac, get_balance};
use moacrpc::libs::writing::cc;
use moacrpc::{log, warn};

/// Print a short status report for the configured node, then the
/// balance of every address passed on the command line.
fn main() -> Result<()> {
    let config = Config::new();
    let client = config.client()?;
    log!(cc::CYAN, "node: {}", client.url());

    let version = client
        .chain3_client_version()
        .context("chain3_clientVersion")?;
    log!(cc::BOLD, "client: {}", version);
    log!("network: {}", client.net_version().context("net_version")?);
    log!("peers: {}", client.net_peer_count().context("net_peerCount")?);
    log!("block: {}", client.mc_block_number().context("mc_blockNumber")?);
    log!(
        "gas price: {}",
        format_moac(client.mc_gas_price().context("mc_gasPrice")?)
    );

    let syncing = client.mc_syncing().context("mc_syncing")?;
    if syncing.is_syncing {
        log!(
            cc::YELLOW,
            "syncing: {}/{} ({} to go)",
            syncing.current_block,
            syncing.highest_block,
            syncing.remaining()
        );
    } else {
        log!(cc::GREEN, "synced");
    }

    for address in std::env::args().skip(1) {
        match get_balance(&client, &address) {
            Ok(balance) => log!(cc::GREEN, "{}: {}", address, format_moac(balance)),
            Err(e) => warn!("{address}: {e}"),
        }
    }

    Ok(())
}
