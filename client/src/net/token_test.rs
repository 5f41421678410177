use super::*;

#[test]
fn memory_holder_save_then_read_returns_token() {
    let holder = MemoryTokenHolder::new();
    holder.save("tok-1");
    assert_eq!(holder.read().as_deref(), Some("tok-1"));
}

#[test]
fn memory_holder_clear_then_read_returns_none() {
    let holder = MemoryTokenHolder::with_token("tok-1");
    holder.clear();
    assert_eq!(holder.read(), None);
}

#[test]
fn memory_holder_save_overwrites_previous_token() {
    let holder = MemoryTokenHolder::with_token("old");
    holder.save("new");
    assert_eq!(holder.read().as_deref(), Some("new"));
}

#[test]
fn memory_holder_clones_share_slot() {
    let holder = MemoryTokenHolder::new();
    let observer = holder.clone();
    holder.save("shared");
    assert_eq!(observer.read().as_deref(), Some("shared"));
    observer.clear();
    assert_eq!(holder.read(), None);
}

#[test]
fn blank_token_reads_as_none() {
    let holder = MemoryTokenHolder::with_token("   ");
    assert_eq!(holder.read(), None);
}

#[test]
fn local_storage_holder_is_inert_outside_browser() {
    let holder = LocalStorageTokenHolder;
    holder.save("tok");
    assert_eq!(holder.read(), None);
    holder.clear();
}
