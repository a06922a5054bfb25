//! Renders the stats panel, activity log, and menu as plain strings
//!
//! Rendering is pure so the loop in `main` just prints whatever comes back.

use std::fmt::Write;

use crate::simulation::Simulator;

/// The banner, current day, each meter, and the last message
pub fn stats_panel(sim: &Simulator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n======================================");
    let _ = writeln!(out, "           Health Simulator");
    let _ = writeln!(out, "======================================");
    let _ = writeln!(out, "Day: {}", sim.day);
    let _ = writeln!(out, "{:<12}{}", "Energy:", sim.energy);
    let _ = writeln!(out, "{:<12}{}", "Happiness:", sim.happiness);
    let _ = writeln!(out, "{:<12}{}", "Stress:", sim.stress);
    let _ = writeln!(out, "\nMessage: {}", sim.message);
    let _ = write!(out, "--------------------------------------");
    out
}

/// Every recorded activity with its count, then the most frequent one
pub fn activity_log(sim: &Simulator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Activity Log ---");

    if sim.activity_counts().is_empty() {
        let _ = writeln!(out, "No activities recorded yet.");
    } else {
        for (activity, count) in sim.activity_log() {
            let _ = writeln!(out, "{:<15}: {} times", activity.label(), count);
        }
        let _ = writeln!(out, "--------------------");
        if let Some((activity, count)) = sim.most_frequent_activity() {
            let _ = writeln!(
                out,
                "Most frequent activity: {} ({} times)",
                activity.label(),
                count
            );
        }
    }
    let _ = write!(out, "--------------------");
    out
}

/// The nine-item action menu
pub fn menu() -> &'static str {
    "\nChoose an action:\n\
     1. Exercise (Boosts Energy, Happiness; Reduces Stress)\n\
     2. Meditate (Reduces Stress; Boosts Happiness)\n\
     3. Eat Healthy (Boosts Energy, Happiness)\n\
     4. Relax (Reduces Stress; Boosts Energy)\n\
     5. Sleep (Major Energy Recovery; Reduces Stress)\n\
     6. Advance to New Day (Experience daily events and changes)\n\
     7. View Activity Stats (See what you've done most)\n\
     8. Reset Simulator (Start Fresh)\n\
     9. Exit Game"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Activity;

    #[test]
    fn test_stats_panel_shows_meters_and_message() {
        let sim = Simulator::new(0);
        let panel = stats_panel(&sim);

        assert!(panel.contains("Day: 1"));
        assert!(panel.contains("Energy:     70/100"));
        assert!(panel.contains("Happiness:  60/100"));
        assert!(panel.contains("Stress:     40/100"));
        assert!(panel.contains("Message: Welcome to your Health Simulator!"));
    }

    #[test]
    fn test_activity_log_empty() {
        let sim = Simulator::new(0);
        assert!(activity_log(&sim).contains("No activities recorded yet."));
    }

    #[test]
    fn test_activity_log_lists_counts_and_winner() {
        let mut sim = Simulator::new(0);
        sim.perform(Activity::Meditate);
        sim.perform(Activity::Meditate);
        sim.perform(Activity::Exercise);

        let log = activity_log(&sim);
        assert!(log.contains("Exercise       : 1 times"));
        assert!(log.contains("Meditate       : 2 times"));
        assert!(log.contains("Most frequent activity: Meditate (2 times)"));
    }

    #[test]
    fn test_menu_lists_all_nine_choices() {
        let menu = menu();
        for n in 1..=9 {
            assert!(menu.contains(&format!("{}. ", n)));
        }
    }
}
