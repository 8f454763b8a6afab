use std::{collections::HashSet, fs, path::Path};

use anyhow::{bail, Context, Result};

use super::activity::{Activity, ActivityStore};

pub fn activities() -> ActivityStore {
    let seed = [
        (
            "Basketball",
            Activity::new(
                "Team sport focusing on basketball skills and competitive play",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["alex@mergington.edu"],
            ),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Learn tennis techniques and participate in matches",
                "Saturdays, 10:00 AM - 12:00 PM",
                10,
                &["james@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Perform in theatrical productions and develop acting skills",
                "Thursdays, 3:30 PM - 5:00 PM",
                25,
                &["isabella@mergington.edu", "lucas@mergington.edu"],
            ),
        ),
        (
            "Art Studio",
            Activity::new(
                "Explore painting, drawing, and other visual art forms",
                "Tuesdays and Thursdays, 4:30 PM - 5:30 PM",
                18,
                &["mia@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop argumentation and public speaking skills",
                "Wednesdays, 3:30 PM - 5:00 PM",
                16,
                &["andrew@mergington.edu", "sarah@mergington.edu"],
            ),
        ),
        (
            "Robotics Club",
            Activity::new(
                "Build and program robots for competitions",
                "Mondays and Fridays, 4:00 PM - 5:30 PM",
                14,
                &["ryan@mergington.edu"],
            ),
        ),
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ];
    ActivityStore::new(seed.into_iter().map(|(name, activity)| (name.to_owned(), activity)))
}

/// Reads a seed file shaped like the `GET /activities` body.
pub fn load(path: &Path) -> Result<ActivityStore> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Couldn't read seed file {}", path.display()))?;
    let store: ActivityStore = serde_json::from_str(&raw)
        .with_context(|| format!("Seed file {} is not a valid activity map", path.display()))?;
    for (name, activity) in store.get_all() {
        check_activity(activity)
            .with_context(|| format!("Seed file {} has an invalid {:?}", path.display(), name))?;
    }
    Ok(store)
}

fn check_activity(activity: &Activity) -> Result<()> {
    if activity.max_participants == 0 {
        bail!("max_participants must be positive");
    }
    let mut seen = HashSet::new();
    for email in activity.participants.iter() {
        if !seen.insert(email) {
            bail!("{} is listed twice", email);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_seed_has_nine_activities() {
        let store = activities();

        assert_eq!(store.len(), 9);
        assert!(store.exists("Tennis Club"));
        assert_eq!(
            store.get("Gym Class").unwrap().participants,
            ["john@mergington.edu", "olivia@mergington.edu"]
        );
    }

    #[test]
    fn load_reads_json_seed() {
        let path = std::env::temp_dir().join(format!("activity-seed-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"Knitting": {"description": "Yarn", "schedule": "Sundays", "max_participants": 4, "participants": ["k@x.edu"]}}"#,
        )
        .unwrap();

        let store = load(&path);
        fs::remove_file(&path).unwrap();
        let store = store.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Knitting").unwrap().participants, ["k@x.edu"]);
    }

    fn write_seed(tag: &str, json: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("activity-seed-{}-{}.json", tag, std::process::id()));
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn load_rejects_duplicate_participants() {
        let path = write_seed(
            "dup",
            r#"{"K": {"description": "d", "schedule": "s", "max_participants": 3, "participants": ["a@x.edu", "a@x.edu"]}}"#,
        );

        let result = load(&path);
        fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("a@x.edu is listed twice"), "{:#}", err);
    }

    #[test]
    fn load_rejects_zero_capacity() {
        let path = write_seed(
            "zero",
            r#"{"K": {"description": "d", "schedule": "s", "max_participants": 0, "participants": []}}"#,
        );

        let result = load(&path);
        fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("must be positive"), "{:#}", err);
    }

    #[test]
    fn load_keeps_file_order() {
        let path = write_seed(
            "order",
            r#"{"Zumba": {"description": "d", "schedule": "s", "max_participants": 5, "participants": []},
                "Archery": {"description": "d", "schedule": "s", "max_participants": 5, "participants": []}}"#,
        );

        let result = load(&path);
        fs::remove_file(&path).unwrap();

        let names: Vec<&String> = result.as_ref().unwrap().get_all().keys().collect();
        assert_eq!(names, ["Zumba", "Archery"]);
    }

    #[test]
    fn builtin_seed_passes_checks() {
        for activity in activities().get_all().values() {
            check_activity(activity).unwrap();
        }
    }

    #[test]
    fn load_fails_on_missing_file() {
        let result = load(Path::new("/definitely/not/here.json"));

        assert!(result.is_err());
    }
}
