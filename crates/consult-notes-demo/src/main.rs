//! Console walkthrough of the consultation store.
//!
//! Output is illustrative and not a stable format.

use anyhow::{anyhow, Result};
use consult_notes_core::{
    default_log_level, init_logging, ConsultNotes, Consultation, ConsultationType,
};
use log::{debug, info};

const PHYSICIAN_ID: &str = "DR1";

fn main() -> Result<()> {
    init_logging(default_log_level()).map_err(|err| anyhow!(err))?;

    let notes = ConsultNotes::new();

    let first = notes.create_consultation(
        "P1".into(),
        PHYSICIAN_ID.into(),
        ConsultationType::Initial,
        "headache for 3 days".into(),
    )?;
    let second = notes.create_consultation(
        "P1".into(),
        PHYSICIAN_ID.into(),
        ConsultationType::FollowUp,
        "follow up for headache".into(),
    )?;
    println!("Created consultation IDs: {}, {}", first, second);

    let outcome = notes.update_consultation(
        first,
        "Probably dehydrated".into(),
        "Drink a lot of water.".into(),
    )?;
    info!("event=demo_update id={} updated={}", first, outcome.is_updated());

    let consults = notes.physician_consultations(PHYSICIAN_ID)?;
    println!(
        "Fetching consultations for {}, found {}",
        PHYSICIAN_ID,
        consults.len()
    );
    for consult in &consults {
        print_consultation(consult);
        debug!("event=demo_record json={}", consult.to_json()?);
    }

    Ok(())
}

fn print_consultation(consult: &Consultation) {
    println!(
        "\nConsultation ID: {} Patient ID: {} Type: {}",
        consult.id, consult.patient_id, consult.consult_type
    );
    println!("Status: {} Complaint: {}", consult.status, consult.complaint);
    if consult.has_assessment() {
        println!("Assessment: {}", consult.assessment);
        println!("Plan: {}", consult.plan);
    }
}
