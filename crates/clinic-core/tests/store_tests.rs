//! Record store integration tests.

use clinic_core::{ClinicCore, ClinicError, NewPatientInput, NewVisitInput, ValidationError};

fn add_patient(core: &ClinicCore, name: &str, age: i64, height: f64) -> i64 {
    core.create_patient(NewPatientInput::new(name, age, height))
        .unwrap()
}

#[test]
fn test_list_groups_and_orders_visits() {
    let core = ClinicCore::open_in_memory().unwrap();

    let a = add_patient(&core, "A", 30, 170.0);
    let b = add_patient(&core, "B", 40, 160.0);

    core.create_visit(NewVisitInput::new(b, "2024-01-01", "x")).unwrap();
    core.create_visit(NewVisitInput::new(b, "2024-03-01", "y")).unwrap();

    let patients = core.list_patients().unwrap();
    assert_eq!(patients.len(), 2);

    assert_eq!(patients[0].id, a);
    assert!(patients[0].visits.is_empty());

    assert_eq!(patients[1].id, b);
    let dates: Vec<String> = patients[1]
        .visits
        .iter()
        .map(|v| v.visit_date.to_string())
        .collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-01-01"]);
    assert_eq!(patients[1].visits[0].observations, "y");
}

#[test]
fn test_visits_stay_with_their_patient() {
    let core = ClinicCore::open_in_memory().unwrap();

    let ids: Vec<i64> = (0..5)
        .map(|i| add_patient(&core, &format!("P{i}"), 20 + i, 150.0 + i as f64))
        .collect();

    // Interleave visits across patients
    let mut expected = Vec::new();
    for round in 1..=3 {
        for &id in &ids {
            let date = format!("2023-0{round}-1{}", id % 10);
            let visit_id = core
                .create_visit(NewVisitInput::new(id, date, format!("round {round}")))
                .unwrap();
            expected.push((visit_id, id));
        }
    }

    let patients = core.list_patients().unwrap();
    assert_eq!(patients.len(), ids.len());

    let mut found = Vec::new();
    for patient in &patients {
        assert_eq!(patient.visits.len(), 3);
        for visit in &patient.visits {
            found.push((visit.id, patient.id));
        }
    }
    found.sort();
    expected.sort();
    assert_eq!(found, expected);
}

#[test]
fn test_rejected_requests_leave_store_untouched() {
    let core = ClinicCore::open_in_memory().unwrap();
    let id = add_patient(&core, "A", 30, 170.0);

    let err = core
        .create_visit(NewVisitInput {
            patient_id: Some(id),
            visit_date: None,
            observations: Some("x".into()),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ClinicError::Validation(ValidationError::MissingField("visit_date"))
    ));

    let err = core
        .create_visit(NewVisitInput::new(id + 1, "2024-01-01", "x"))
        .unwrap_err();
    assert!(matches!(err, ClinicError::Reference(_)));

    let err = core
        .create_patient(NewPatientInput::new("B", 30, 1000.0))
        .unwrap_err();
    assert!(matches!(err, ClinicError::Validation(_)));

    let patients = core.list_patients().unwrap();
    assert_eq!(patients.len(), 1);
    assert!(patients[0].visits.is_empty());
}

#[test]
fn test_records_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clinic.db");

    let patient_id = {
        let core = ClinicCore::open(&path).unwrap();
        let id = add_patient(&core, "Persistent", 50, 180.0);
        core.create_visit(NewVisitInput::new(id, "2022-12-31", "Follow-up"))
            .unwrap();
        id
    };

    let core = ClinicCore::open(&path).unwrap();
    let record = core.get_patient(patient_id).unwrap().unwrap();
    assert_eq!(record.name, "Persistent");
    assert_eq!(record.visits.len(), 1);
    assert_eq!(record.visits[0].observations, "Follow-up");
}

#[test]
fn test_handle_is_shared_across_threads() {
    let core = ClinicCore::open_in_memory().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let core = core.clone();
            std::thread::spawn(move || {
                core.create_patient(NewPatientInput::new(format!("T{i}"), 30, 170.0))
                    .unwrap()
            })
        })
        .collect();

    let mut ids: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
    assert_eq!(core.list_patients().unwrap().len(), 4);
}
