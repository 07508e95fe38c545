//! First-run seed data.
//!
//! These collections serve as channel defaults the first time a view loads,
//! so a fresh install is populated rather than blank. They are never saved
//! back unless a view writes through its channel.

use blan_core::chat::{ChatMessage, MessageKind};
use blan_core::hash;
use blan_core::job::{Job, JobStatus};
use blan_core::ledger::LedgerEntry;
use blan_core::profile::Profile;
use blan_core::security::{SecurityAlert, Severity};
use blan_core::time::now_millis;

const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;

/// The local resident used until the profile editor writes its own.
pub fn default_profile() -> Profile {
    Profile {
        id: "u-777".to_string(),
        name: "Alex Rivera".to_string(),
        address: "Sector B-4, Unit 12".to_string(),
        skills: vec![
            "Carpentry".to_string(),
            "Plumbing".to_string(),
            "Electrical".to_string(),
        ],
        bio: "Local handyman looking to build community strength.".to_string(),
        karma_balance: 1250,
        solar_watts: 420,
        is_elderly: false,
        avatar: "https://picsum.photos/seed/alex/100/100".to_string(),
    }
}

/// Three open jobs for the board's first load.
pub fn initial_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "job-1".to_string(),
            title: "Leaking Sink Repair".to_string(),
            description: "Kitchen sink in Unit 14 has a slow leak. Need help with plumbing."
                .to_string(),
            posted_by: "u-elderly-1".to_string(),
            poster_name: "Mrs. Gable".to_string(),
            reward: 50,
            required_skills: vec!["Plumbing".to_string()],
            status: JobStatus::Open,
            assigned_to: None,
            location: "Section A-3".to_string(),
        },
        Job {
            id: "job-2".to_string(),
            title: "Garden Fence Fix".to_string(),
            description: "Small section of the perimeter garden fence needs re-boarding."
                .to_string(),
            posted_by: "u-gov-1".to_string(),
            poster_name: "Community Garden".to_string(),
            reward: 120,
            required_skills: vec!["Carpentry".to_string()],
            status: JobStatus::Open,
            assigned_to: None,
            location: "Garden Quad".to_string(),
        },
        Job {
            id: "job-3".to_string(),
            title: "Tech Setup for Tablet".to_string(),
            description: "Help setting up a new communication tablet for an elderly neighbor."
                .to_string(),
            posted_by: "u-elderly-2".to_string(),
            poster_name: "Mr. Henderson".to_string(),
            reward: 30,
            required_skills: vec!["Electrical".to_string(), "Software".to_string()],
            status: JobStatus::Open,
            assigned_to: None,
            location: "Section B-1".to_string(),
        },
    ]
}

/// Two chat messages so the broadcast channel starts with history.
pub fn initial_messages() -> Vec<ChatMessage> {
    let now = now_millis();
    vec![
        ChatMessage {
            id: "m1".to_string(),
            sender_id: "u-elderly-1".to_string(),
            sender_name: "Mrs. Gable".to_string(),
            text: "Thank you for the sink fix, Alex!".to_string(),
            timestamp: now - HOUR_MS,
            kind: MessageKind::User,
        },
        ChatMessage {
            id: "m2".to_string(),
            sender_id: "u-777".to_string(),
            sender_name: "Alex Rivera".to_string(),
            text: "No problem at all! Let me know if it leaks again.".to_string(),
            timestamp: now - HOUR_MS + 100_000,
            kind: MessageKind::User,
        },
    ]
}

/// Two recent alerts for the security log's first load (newest first).
pub fn initial_alerts() -> Vec<SecurityAlert> {
    let now = now_millis();
    vec![
        SecurityAlert {
            id: "a1".to_string(),
            camera: "Main Entrance".to_string(),
            timestamp: now - HOUR_MS,
            message: "Package delivery detected at Gate 2".to_string(),
            severity: Severity::Info,
        },
        SecurityAlert {
            id: "a2".to_string(),
            camera: "North Perimeter".to_string(),
            timestamp: now - 2 * HOUR_MS,
            message: "Motion detected in restricted zone B".to_string(),
            severity: Severity::Warning,
        },
    ]
}

/// Two ledger entries, fingerprinted the same way live entries are.
pub fn initial_ledger() -> Vec<LedgerEntry> {
    let now = now_millis();
    let mut entries = vec![
        LedgerEntry {
            id: "tx-1".to_string(),
            from: "SYSTEM-ADMIN".to_string(),
            to: "u-777".to_string(),
            amount: 1000,
            timestamp: now - 2 * DAY_MS,
            reason: "Monthly Basic Allocation".to_string(),
            hash: String::new(),
        },
        LedgerEntry {
            id: "tx-2".to_string(),
            from: "u-elderly-1".to_string(),
            to: "u-777".to_string(),
            amount: 50,
            timestamp: now - HOUR_MS,
            reason: "Service: Plumbing Repair".to_string(),
            hash: String::new(),
        },
    ];
    for entry in &mut entries {
        entry.hash = hash::fingerprint(&(
            &entry.id,
            &entry.from,
            &entry.to,
            entry.amount,
            entry.timestamp,
            &entry.reason,
        ))
        .unwrap_or_default();
    }
    entries
}
