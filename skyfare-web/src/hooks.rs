use skyfare_core::CancelHandle;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

pub type TaskSlot = Rc<RefCell<Option<CancelHandle>>>;

/// Holds the component's in-flight task; the task is cancelled on unmount.
#[hook]
pub fn use_task_slot() -> TaskSlot {
    let slot = use_mut_ref(|| None::<CancelHandle>);
    {
        let slot = slot.clone();
        use_effect_with((), move |()| {
            move || {
                if let Some(handle) = slot.borrow_mut().take() {
                    handle.cancel();
                }
            }
        });
    }
    slot
}

/// Cancel whatever the slot holds and store `handle` instead.
pub fn replace_task(slot: &TaskSlot, handle: CancelHandle) {
    if let Some(previous) = slot.borrow_mut().replace(handle) {
        previous.cancel();
    }
}
