//! Exercises over singly linked lists.

use drills_core::{LinkTable, ListNode};

/// Reverses a list in place and returns the new head.
///
/// Nodes are relinked one at a time; nothing is allocated.
#[must_use]
pub fn reverse_list(head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let mut previous = None;
    let mut current = head;

    while let Some(mut node) = current {
        current = node.next.take();
        node.next = previous;
        previous = Some(node);
    }

    previous
}

/// Returns `true` if following links from the head never reaches the end.
///
/// Floyd's tortoise and hare: a slow cursor advances one link per step and a
/// fast one two. They meet if and only if the list loops.
#[must_use]
pub fn has_cycle(list: &LinkTable) -> bool {
    let mut slow = list.head();
    let mut fast = list.head();

    loop {
        let Some(ahead) = fast
            .and_then(|node| list.next(node))
            .and_then(|node| list.next(node))
        else {
            return false;
        };
        fast = Some(ahead);
        slow = slow.and_then(|node| list.next(node));

        if slow == fast {
            return true;
        }
    }
}
