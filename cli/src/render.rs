//! Text rendering for the CLI, laid out like the dashboard panels.

use serde_json::Value;
use shared::models::{AlertEvent, HealingEvent, HealthSnapshot};
use shared::query::SummaryResponse;
use std::io::Write;

/// Prints the health panel: host, CPU, memory, disk, uptime, and services.
///
/// Fields the agent did not report are skipped. If none of the known fields
/// are present the raw snapshot is printed instead.
pub fn health(out: &mut impl Write, snapshot: &HealthSnapshot) -> anyhow::Result<()> {
    if !snapshot.is_available() {
        writeln!(out, "no health data available")?;
        return Ok(());
    }

    let mut printed = false;

    if let Some(host) = snapshot.hostname() {
        writeln!(out, "Host:     {host}")?;
        printed = true;
    }

    if let Some(usage) = snapshot.pointer(&["cpu", "usage_percent"]) {
        writeln!(out, "CPU:      {}%", text(usage))?;
        printed = true;
    }

    if let Some(load) = snapshot.pointer(&["cpu", "load_avg"]) {
        let avg = |key: &str| load.get(key).map_or_else(|| "-".to_string(), text);
        writeln!(out, "Load:     {} / {} / {}", avg("1m"), avg("5m"), avg("15m"))?;
        printed = true;
    }

    if let Some(used) = snapshot.pointer(&["memory", "used_percent"]) {
        write!(out, "Memory:   {}%", text(used))?;
        if let (Some(used_mb), Some(total_mb)) = (
            snapshot.pointer(&["memory", "used_mb"]),
            snapshot.pointer(&["memory", "total_mb"]),
        ) {
            write!(out, " ({} / {} MB)", text(used_mb), text(total_mb))?;
        }
        writeln!(out)?;
        printed = true;
    }

    if let Some(used) = snapshot.pointer(&["disk", "used_percent"]) {
        write!(out, "Disk:     {}%", text(used))?;
        if let (Some(used_gb), Some(total_gb)) = (
            snapshot.pointer(&["disk", "used_gb"]),
            snapshot.pointer(&["disk", "total_gb"]),
        ) {
            write!(out, " ({} / {} GB)", text(used_gb), text(total_gb))?;
        }
        writeln!(out)?;
        printed = true;
    }

    if let Some(seconds) = snapshot.uptime_seconds() {
        writeln!(out, "Uptime:   {}", format_uptime(seconds))?;
        printed = true;
    }

    if let Some(Value::Object(services)) = snapshot.get("services") {
        writeln!(out, "Services:")?;
        for (name, state) in services {
            writeln!(out, "  {name:<12} {}", text(state))?;
        }
        printed = true;
    }

    if !printed {
        serde_json::to_writer_pretty(&mut *out, snapshot)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Prints one row per alert event with its classified kind.
pub fn alerts(out: &mut impl Write, events: &[AlertEvent]) -> anyhow::Result<()> {
    if events.is_empty() {
        writeln!(out, "No alerts recorded")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<16} {:<20} {:<16} {:<16} {:>8} {:>10}  TIMESTAMP",
        "KIND", "ALERT", "STATE", "HOST", "VALUE", "THRESHOLD"
    )?;
    for event in events {
        writeln!(
            out,
            "{:<16} {:<20} {:<16} {:<16} {:>8} {:>10}  {}",
            event.kind().to_string(),
            event.alert,
            event.state,
            event.host,
            event.value,
            event.threshold,
            event.timestamp
        )?;
    }

    Ok(())
}

/// Prints one line per healing event, tagged with its outcome.
pub fn healing(out: &mut impl Write, events: &[HealingEvent]) -> anyhow::Result<()> {
    if events.is_empty() {
        writeln!(out, "No self-healing events recorded")?;
        return Ok(());
    }

    for event in events {
        writeln!(out, "[{:<7}] {event}", event.outcome().to_string())?;
    }

    Ok(())
}

/// Prints the summary: health availability and both recent lists.
pub fn summary(out: &mut impl Write, summary: &SummaryResponse) -> anyhow::Result<()> {
    let availability = if summary.health_available {
        "available"
    } else {
        "unavailable"
    };
    writeln!(out, "Health data: {availability}")?;

    writeln!(out)?;
    writeln!(out, "Recent alerts:")?;
    alerts(out, &summary.recent_alerts)?;

    writeln!(out)?;
    writeln!(out, "Recent self-healing:")?;
    healing(out, &summary.recent_healing)
}

/// Formats an uptime as `Xd Yh Zm`, `Yh Zm`, or `Zm`.
fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Renders a JSON value without quoting strings.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
