use std::io::Write;

use crossterm::{style, ExecutableCommand, Result};

use shared_resources::elevator_status::ElevatorStatus;

use dispatcher::Scheduler;

pub fn printstatus<W: Write>(out: &mut W, scheduler: Scheduler, statuses: &[ElevatorStatus]) -> Result<()> {
    out.execute(style::SetAttribute(style::Attribute::Bold))?;
    writeln!(out, "+----------------------------------------------+")?;
    writeln!(out, "| {0:<44} |", scheduler.as_str().to_uppercase())?;
    out.execute(style::SetAttribute(style::Attribute::Reset))?;
    writeln!(out, "+----------+------------+------------+----------+")?;
    writeln!(out, "| {0:<8} | {1:<10} | {2:<10} | {3:<8} |", "ID", "FLOOR", "DEST", "STATE")?;
    writeln!(out, "+----------+------------+------------+----------+")?;
    for status in statuses {
        let state = if status.is_moving() { "moving" } else { "idle" };
        writeln!(out, "| {0:<8} | {1:<10} | {2:<10} | {3:<8} |",
            status.id,
            status.current_floor,
            status.destination_floor,
            state)?;
    }
    writeln!(out, "+----------+------------+------------+----------+")?;
    Ok(())
}
