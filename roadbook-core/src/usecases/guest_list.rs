use super::prelude::*;

/// Guest list headcount for one event, by approval status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuestCounts {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub declined: usize,
}

pub fn guest_counts_for_event<D: GuestRepo>(db: &D, event_id: &str) -> Result<GuestCounts> {
    let mut counts = GuestCounts::default();
    for guest in db.guests_of_event(event_id)? {
        match guest.status {
            GuestStatus::Approved => counts.approved += 1,
            GuestStatus::Pending => counts.pending += 1,
            GuestStatus::Declined => counts.declined += 1,
        }
        counts.total += 1;
    }
    Ok(counts)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicketTypeSummary {
    pub allowed: u32,
    pub used: u32,
    pub remaining: u32,
}

/// Per-type allocation budget for one event. A type without an
/// allocation row reads as an all-zero budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicketAllocationSummary {
    pub comp: TicketTypeSummary,
    pub vip: TicketTypeSummary,
    pub guest: TicketTypeSummary,
}

pub fn ticket_allocation_summary<D: GuestRepo>(
    db: &D,
    event_id: &str,
) -> Result<TicketAllocationSummary> {
    let allocations = db.ticket_allocations_of_event(event_id)?;
    let summarize = |ticket_type: TicketType| {
        allocations
            .iter()
            .find(|a| a.ticket_type == ticket_type)
            .map(|a| TicketTypeSummary {
                allowed: a.allowed,
                used: a.used,
                remaining: a.remaining(),
            })
            .unwrap_or_default()
    };
    Ok(TicketAllocationSummary {
        comp: summarize(TicketType::Comp),
        vip: summarize(TicketType::Vip),
        guest: summarize(TicketType::Guest),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicketTotals {
    pub tickets: u32,
    pub passes: u32,
}

/// Summed tickets and passes over the approved guests of one event.
pub fn approved_ticket_totals<D: GuestRepo>(db: &D, event_id: &str) -> Result<TicketTotals> {
    let mut totals = TicketTotals::default();
    for guest in db.guests_of_event(event_id)? {
        if !guest.is_approved() {
            continue;
        }
        totals.tickets += guest.tickets;
        totals.passes += guest.passes;
    }
    Ok(totals)
}
