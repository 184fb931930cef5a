//! Static event listing and ticket tier catalogue.
//!
//! There is one event and no inventory tracking: availability is display copy.

use crate::booking::TicketType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub date: &'static str,
    pub location: &'static str,
}

pub const EVENT: EventInfo = EventInfo {
    name: "Techember Fest '25",
    tagline: "Join us for an unforgettable experience at Techember Fest '25! Secure your spot now.",
    date: "March 15, 2025 7:00 PM",
    location: "04 Rumens road, Ikoyi, Lagos",
};

/// One purchasable tier as shown on the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketTier {
    pub ticket_type: TicketType,
    pub price: &'static str,
    pub available: &'static str,
}

pub const TICKET_TIERS: [TicketTier; 3] = [
    TicketTier {
        ticket_type: TicketType::Regular,
        price: "Free",
        available: "20/52",
    },
    TicketTier {
        ticket_type: TicketType::Vip,
        price: "$150",
        available: "20/52",
    },
    TicketTier {
        ticket_type: TicketType::Vvip,
        price: "$150",
        available: "20/52",
    },
];

pub fn tier_for(ticket_type: TicketType) -> &'static TicketTier {
    match ticket_type {
        TicketType::Regular => &TICKET_TIERS[0],
        TicketType::Vip => &TICKET_TIERS[1],
        TicketType::Vvip => &TICKET_TIERS[2],
    }
}
