//! # Simulation Report
//!
//! Plain-text rendering of a finished simulation: the per-process table,
//! the system summary, the completion list and the execution timeline.

use bitflags::bitflags;
use core::fmt::{self, Write};
use rrsim_execution::scheduler::{Simulation, SliceKind};

bitflags! {
    /// Report sections to render
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ReportSections: u8 {
        /// Per-process turnaround/waiting/response table
        const TABLE = 1 << 0;
        /// Averages and CPU utilization
        const SUMMARY = 1 << 1;
        /// Completion list in completion order
        const GANTT = 1 << 2;
        /// Execution slices, including idle time
        const TIMELINE = 1 << 3;
        /// Everything above
        const FULL = Self::TABLE.bits() | Self::SUMMARY.bits()
            | Self::GANTT.bits() | Self::TIMELINE.bits();
    }
}

impl Default for ReportSections {
    fn default() -> Self {
        Self::TABLE | Self::SUMMARY | Self::GANTT
    }
}

const RULE: &str = "------------------------------------------------";

/// Render the selected sections of `simulation` into `out`
pub fn render<W: Write>(
    simulation: &Simulation,
    sections: ReportSections,
    out: &mut W,
) -> fmt::Result {
    if sections.contains(ReportSections::TABLE) {
        render_table(simulation, out)?;
    }
    if sections.contains(ReportSections::SUMMARY) {
        render_summary(simulation, out)?;
    }
    if sections.contains(ReportSections::GANTT) {
        render_gantt(simulation, out)?;
    }
    if sections.contains(ReportSections::TIMELINE) {
        render_timeline(simulation, out)?;
    }
    Ok(())
}

fn render_table<W: Write>(simulation: &Simulation, out: &mut W) -> fmt::Result {
    writeln!(out, "Round-Robin simulation results")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Process | Turnaround | Waiting | Response")?;
    writeln!(out, "{}", RULE)?;
    for m in &simulation.processes {
        writeln!(
            out,
            "P{:<6} | {:>10} | {:>7} | {:>8}",
            m.id.as_u32(),
            m.turnaround_time,
            m.waiting_time,
            m.response_time
        )?;
    }
    writeln!(out, "{}", RULE)
}

fn render_summary<W: Write>(simulation: &Simulation, out: &mut W) -> fmt::Result {
    let system = &simulation.system;
    writeln!(out, "Average turnaround: {:.2}", system.avg_turnaround_time)?;
    writeln!(out, "Average waiting: {:.2}", system.avg_waiting_time)?;
    writeln!(out, "Average response: {:.2}", system.avg_response_time)?;
    writeln!(out, "CPU utilization: {:.2}%", system.cpu_utilization)
}

fn render_gantt<W: Write>(simulation: &Simulation, out: &mut W) -> fmt::Result {
    writeln!(out, "Completion order:")?;
    for (i, c) in simulation.completions().iter().enumerate() {
        if i > 0 {
            out.write_str(" | ")?;
        }
        write!(out, "{} completed at t={}", c.id, c.at)?;
    }
    writeln!(out)
}

fn render_timeline<W: Write>(simulation: &Simulation, out: &mut W) -> fmt::Result {
    writeln!(out, "Timeline:")?;
    for (i, slice) in simulation.timeline.slices().iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        match slice.kind {
            SliceKind::Run(id) => write!(out, "[{}-{}) {}", slice.start, slice.end, id)?,
            SliceKind::Idle => write!(out, "[{}-{}) idle", slice.start, slice.end)?,
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulate;
    use alloc::string::String;
    use rrsim_execution::process::ProcessSpec;

    fn two_process_run() -> Simulation {
        simulate(&[ProcessSpec::new(1, 0, 2, 0), ProcessSpec::new(2, 5, 2, 0)], 3).unwrap()
    }

    #[test]
    fn test_render_table_and_summary() {
        let mut out = String::new();
        let sections = ReportSections::TABLE | ReportSections::SUMMARY;
        render(&two_process_run(), sections, &mut out).unwrap();

        assert!(out.contains("Process | Turnaround | Waiting | Response"));
        assert!(out.contains("P1      |          2 |       0 |        0"));
        assert!(out.contains("Average turnaround: 2.00"));
        assert!(out.contains("CPU utilization: 57.14%"));
        assert!(!out.contains("Completion order"));
    }

    #[test]
    fn test_render_gantt_and_timeline() {
        let mut out = String::new();
        let sections = ReportSections::GANTT | ReportSections::TIMELINE;
        render(&two_process_run(), sections, &mut out).unwrap();

        assert!(out.contains("P1 completed at t=2 | P2 completed at t=7"));
        assert!(out.contains("[0-2) P1 [2-5) idle [5-7) P2"));
    }

    #[test]
    fn test_default_sections() {
        let sections = ReportSections::default();
        assert!(sections.contains(ReportSections::GANTT));
        assert!(!sections.contains(ReportSections::TIMELINE));
        assert!(ReportSections::FULL.contains(sections));
    }
}
