use super::*;
use ::calls::optimistic::apply_with_rollback;

fn call(id: &str) -> Call {
    Call {
        id: id.to_owned(),
        ..Call::default()
    }
}

#[test]
fn summary_pluralizes() {
    assert_eq!(summary(CallView::All, 0), "Aucun appel");
    assert_eq!(summary(CallView::Today, 0), "Aucun appel traité aujourd'hui");
    assert_eq!(summary(CallView::History, 1), "1 appel");
    assert_eq!(summary(CallView::History, 12), "12 appels");
}

#[test]
fn remove_call_is_reverted_on_failure() {
    let before = vec![call("a"), call("b")];
    let action = RemoveCall("a".to_owned());

    let settled = futures::executor::block_on(apply_with_rollback(&before, &action, || async {
        Err::<(), _>("refused")
    }));
    assert_eq!(settled.state, before);
    assert_eq!(settled.result, Err("refused"));
}

#[test]
fn remove_call_is_kept_on_success() {
    let before = vec![call("a"), call("b")];
    let settled = futures::executor::block_on(apply_with_rollback(&before, &RemoveCall("b".to_owned()), || async {
        Ok::<(), ()>(())
    }));
    assert_eq!(settled.state.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["a"]);
}

#[test]
fn overlapping_deletes_do_not_resurrect_each_other() {
    let mut items = vec![call("a"), call("b"), call("c")];
    let first = Pending::apply(&mut items, RemoveCall("a".to_owned()));
    let second = Pending::apply(&mut items, RemoveCall("b".to_owned()));

    second.settle::<()>(&mut items, &Ok(()));
    first.settle::<()>(&mut items, &Ok(()));

    assert_eq!(items.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["c"]);
}

#[test]
fn failed_delete_returns_the_call_to_a_reloaded_list() {
    let mut items = vec![call("a"), call("b")];
    let pending = Pending::apply(&mut items, RemoveCall("a".to_owned()));
    items = vec![call("b"), call("z")];

    pending.settle(&mut items, &Err("refused"));

    assert_eq!(items.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["a", "b", "z"]);
}
