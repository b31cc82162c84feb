use super::*;

#[test]
fn hidden_in_quiet_mode() {
    let progress = AuditProgress::new(true);
    progress.update(ProgressPhase::Discovery, 0, 0, "scanning");
    progress.update(ProgressPhase::Checking, 1, 3, "a.css");
    progress.finish();
}

#[test]
fn tracks_callback_position() {
    let progress = AuditProgress::new_with_visibility(false, false);
    progress.update(ProgressPhase::Parsing, 2, 5, "b.css");
    assert_eq!(progress.position(), 2);
    progress.update(ProgressPhase::Checking, 5, 5, "done");
    assert_eq!(progress.position(), 5);
    progress.finish();
}

#[test]
fn clones_share_the_bar() {
    let progress = AuditProgress::new(true);
    let cloned = progress.clone();
    cloned.update(ProgressPhase::Reporting, 4, 4, "report");
    assert_eq!(progress.position(), 4);
    progress.finish();
}
