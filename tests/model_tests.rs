use std::cell::RefCell;
use std::rc::Rc;

use safecracker::{parse_safe, SafeModel, VerifyCause};

fn model(text: &str) -> SafeModel {
    SafeModel::new(parse_safe(text).expect("failed to parse safe"))
}

#[test]
fn add_and_remove_report_their_coordinates() {
    let mut m = model("1 2\n. .\n");
    assert!(m.add(0, 0));
    assert_eq!(m.status(), "Laser added at: (0, 0)");
    assert!(m.remove(0, 0));
    assert_eq!(m.status(), "Laser removed at: (0, 0)");
}

#[test]
fn rejected_operations_report_errors_and_change_nothing() {
    let mut m = model("2 2\nX .\n. .\n");
    let before = m.safe().clone();

    assert!(!m.add(0, 0), "pillar cell is occupied");
    assert_eq!(m.status(), "Error adding laser at: (0, 0)");
    assert!(!m.add(5, 5));
    assert_eq!(m.status(), "Error adding laser at: (5, 5)");
    assert!(!m.remove(1, 1), "nothing to remove");
    assert_eq!(m.status(), "Error removing laser at: (1, 1)");
    assert_eq!(m.safe(), &before);
}

#[test]
fn verify_reports_the_first_offending_coordinate() {
    let mut m = model("1 2\n. .\n");
    assert!(!m.verify());
    assert_eq!(m.status(), "Error verifying at: (0, 0)");
    let failure = m.last_failure().expect("failure recorded");
    assert_eq!(failure.cause, VerifyCause::UnlitCell);

    m.add(0, 0);
    assert!(m.verify());
    assert_eq!(m.status(), "Safe is fully verified!");
    assert_eq!(m.last_failure(), None);
}

#[test]
fn listener_fires_after_every_operation() {
    let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut m = model("1 2\n. .\n");
    m.set_listener(Rc::new(move |m: &SafeModel| {
        sink.borrow_mut().push(m.status().to_string());
    }));

    m.add(0, 0);
    m.verify();
    m.remove(0, 0);

    assert_eq!(
        *seen.borrow(),
        vec![
            "Laser added at: (0, 0)".to_string(),
            "Safe is fully verified!".to_string(),
            "Laser removed at: (0, 0)".to_string(),
        ]
    );
}
