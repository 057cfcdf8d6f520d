//! Timeline engine: the single-CPU simulation loop.
//!
//! # Algorithm
//!
//! 1. Clone every process into a private working state (arena by input index).
//! 2. At each decision point, admit processes with `arrival_time <= t`.
//! 3. If nothing is ready, emit an idle slice up to the next arrival.
//! 4. Otherwise pick the best ready process with the discipline's rule
//!    chain, run it for the discipline's run length and advance `t`.
//! 5. Processes that arrived during the slice enter the ready set before
//!    an unfinished (preempted) process is put back.
//! 6. Stop when nothing is ready and nothing is left to arrive.
//!
//! # Complexity
//! O(d * n) where d = decision points (at most 2n for event-driven
//! disciplines, `sum(burst) / quantum + n` for Round Robin).

use log::{debug, trace};
use std::collections::VecDeque;

use super::Discipline;
use crate::dispatching::SchedulingContext;
use crate::error::SchedulerError;
use crate::models::{Process, ProcessState, Time, Timeline};
use crate::validation::validate_input;

/// Raw output of one simulation run, before metrics.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Discipline that was simulated.
    pub discipline: Discipline,
    /// CPU timeline from t=0 to the last completion.
    pub timeline: Timeline,
    /// Final working state of every process, in input order.
    pub records: Vec<ProcessState>,
}

impl Simulation {
    /// Sum of burst times of all processes.
    pub fn total_burst(&self) -> Time {
        self.records.iter().map(|r| r.process.burst_time).sum()
    }
}

/// Runs `discipline` over `processes`.
///
/// The input is validated first; on failure no simulation state is built.
/// `processes` is never mutated, so the same slice can be fed to several
/// disciplines.
pub fn simulate(processes: &[Process], discipline: &Discipline) -> Result<Simulation, SchedulerError> {
    validate_input(processes, discipline)?;

    let mut states: Vec<ProcessState> = processes.iter().map(ProcessState::new).collect();

    let mut arrival_order: Vec<usize> = (0..states.len()).collect();
    arrival_order.sort_by_key(|&i| (states[i].process.arrival_time, states[i].pid()));
    let mut pending: VecDeque<usize> = arrival_order.into();

    let engine = discipline.rule_engine();
    let mut ready: Vec<usize> = Vec::with_capacity(states.len());
    let mut timeline = Timeline::new();
    let mut now: Time = 0;
    let mut seq: u64 = 0;

    debug!("simulating {} over {} processes", discipline, states.len());

    loop {
        admit_arrivals(&mut states, &mut pending, &mut ready, &mut seq, now);

        if ready.is_empty() {
            let Some(&next) = pending.front() else {
                break;
            };
            let next_arrival = states[next].process.arrival_time;
            trace!("t={now}: cpu idle until {next_arrival}");
            timeline.push(None, now, next_arrival);
            now = next_arrival;
            continue;
        }

        let context = SchedulingContext::at_time(now);
        let Some(pos) = engine.select_best(&states, &ready, &context) else {
            break;
        };
        let idx = ready.remove(pos);
        let next_arrival = pending.front().map(|&i| states[i].process.arrival_time);

        let state = &mut states[idx];
        let slice = discipline.run_length(state, next_arrival, now);
        if state.start_time.is_none() {
            state.start_time = Some(now);
        }
        trace!(
            "t={now}: dispatch pid {} for {slice} (remaining {}, ready {})",
            state.pid(),
            state.remaining_time,
            ready.len()
        );

        timeline.push(Some(state.pid()), now, now + slice);
        state.remaining_time -= slice;
        now += slice;

        if state.is_finished() {
            state.completion_time = Some(now);
            debug!("t={now}: pid {} completed", state.pid());
        }

        admit_arrivals(&mut states, &mut pending, &mut ready, &mut seq, now);

        if !states[idx].is_finished() {
            seq += 1;
            states[idx].ready_seq = seq;
            ready.push(idx);
        }
    }

    check_consistency(&states, &timeline)?;

    Ok(Simulation {
        discipline: *discipline,
        timeline,
        records: states,
    })
}

/// Moves every pending process with `arrival_time <= now` into `ready`.
fn admit_arrivals(
    states: &mut [ProcessState],
    pending: &mut VecDeque<usize>,
    ready: &mut Vec<usize>,
    seq: &mut u64,
    now: Time,
) {
    while let Some(&idx) = pending.front() {
        if states[idx].process.arrival_time > now {
            break;
        }
        pending.pop_front();
        *seq += 1;
        states[idx].ready_seq = *seq;
        ready.push(idx);
        trace!("t={now}: pid {} arrived", states[idx].pid());
    }
}

/// Rejects runs that left work undone or lost CPU time.
fn check_consistency(states: &[ProcessState], timeline: &Timeline) -> Result<(), SchedulerError> {
    if let Some(s) = states
        .iter()
        .find(|s| !s.is_finished() || s.completion_time.is_none())
    {
        return Err(SchedulerError::IncompleteState {
            pid: s.pid(),
            remaining: s.remaining_time,
        });
    }

    let expected: Time = states.iter().map(|s| s.process.burst_time).sum();
    let busy = timeline.busy_time();
    if busy != expected {
        return Err(SchedulerError::ConservationViolated { busy, expected });
    }
    Ok(())
}
