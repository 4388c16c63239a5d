use std::cell::RefCell;
use std::rc::Rc;

use kinetic_animation_core::{Animator, Keyframe, NodeId};
use kinetic_test_fixtures::{MockHost, MockPlayState, WatchTarget};

/// it should create a paused-then-resumed native animation with the built
/// keyframes and resolved timing, and fire onFinish exactly once
#[test]
fn scenario_single_node_native() {
    let mut host = MockHost::native();
    let element = host.element();
    let mut animator = Animator::default();

    let finished = Rc::new(RefCell::new(0u32));
    let counter = finished.clone();
    let id = animator
        .new_animation()
        .add_element(element)
        .from_to("opacity", "0", "1")
        .duration(200.0)
        .on_finish(move |_| *counter.borrow_mut() += 1)
        .id();

    animator.play(id, &mut host);

    assert_eq!(host.animation_order.len(), 1);
    let handle = host.animation_order[0];
    let animation = &host.animations[&handle];
    assert_eq!(
        animation.keyframes,
        vec![
            Keyframe::at(0.0).style("opacity", "0"),
            Keyframe::at(1.0).style("opacity", "1"),
        ]
    );
    assert_eq!(animation.timing.duration, Some(200.0));
    assert_eq!(animation.state, MockPlayState::Running);
    assert_eq!(host.watched_nodes(), vec![id]);

    animator.animation_finish(id, &mut host);
    assert_eq!(*finished.borrow(), 1);
    // Natural completion releases the backend and returns the node to idle.
    assert_eq!(host.animations[&handle].state, MockPlayState::Cancelled);
    assert!(!animator.is_initialized(id));

    // A late duplicate event is dropped.
    animator.animation_finish(id, &mut host);
    assert_eq!(*finished.borrow(), 1);
}

/// it should drive the CSS fallback end to end: stylesheet, inline block,
/// animationend watch, and style removal on completion
#[test]
fn scenario_single_node_css() {
    let mut host = MockHost::css_only();
    let element = host.element();
    let mut animator = Animator::default();

    let id = animator
        .new_animation()
        .add_element(element)
        .from_to("opacity", "0", "1")
        .duration(200.0)
        .easing("ease-out")
        .id();
    let name = animator.get_name(id).to_string();

    animator.play(id, &mut host);

    assert_eq!(host.active_stylesheets(), 1);
    let sheet = &host.stylesheets[&host.stylesheet_order[0]];
    assert!(sheet.css_text.starts_with(&format!("@keyframes {name} {{")));
    assert_eq!(sheet.css_id, format!("kinetic-{name}"));

    assert_eq!(host.style(element, "animation-name"), Some(name.as_str()));
    assert_eq!(host.style(element, "animation-duration"), Some("200ms"));
    assert_eq!(
        host.style(element, "animation-timing-function"),
        Some("ease-out")
    );
    assert_eq!(host.style(element, "animation-fill-mode"), Some("forwards"));
    assert_eq!(host.style(element, "animation-play-state"), Some("running"));
    assert_eq!(host.finish_watches[0].target, WatchTarget::Element(element));

    animator.animation_finish(id, &mut host);
    assert_eq!(host.style(element, "animation-name"), None);
    assert_eq!(host.style(element, "animation-play-state"), None);
    assert_eq!(host.active_stylesheets(), 0);
}

/// it should start children before the parent returns from play and finish
/// in post-order
#[test]
fn scenario_nested_pre_order_start_post_order_finish() {
    let mut host = MockHost::native();
    let parent_el = host.element();
    let child_el = host.element();
    let mut animator = Animator::default();
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let child = animator
        .new_animation()
        .add_element(child_el)
        .from_to("opacity", "0", "1")
        .id();
    animator.after_add_write(child, {
        let log = log.clone();
        move || log.borrow_mut().push("child-after")
    });
    let parent = animator
        .new_animation()
        .add_element(parent_el)
        .from_to("transform", "scale(0.9)", "scale(1)")
        .duration(250.0)
        .add_animation(child)
        .id();
    animator.after_add_write(parent, {
        let log = log.clone();
        move || log.borrow_mut().push("parent-after")
    });

    animator.play(parent, &mut host);

    // Child backend was created and resumed before play() returned.
    assert_eq!(host.animation_order.len(), 2);
    assert_eq!(host.animations[&host.animation_order[0]].element, child_el);
    for handle in &host.animation_order {
        assert_eq!(host.animations[handle].state, MockPlayState::Running);
    }
    assert_eq!(host.watched_nodes(), vec![child, parent]);

    animator.animation_finish(child, &mut host);
    assert_eq!(*log.borrow(), vec!["child-after"]);

    animator.animation_finish(parent, &mut host);
    assert_eq!(*log.borrow(), vec!["child-after", "parent-after"]);
}

/// it should fire a parent's onFinish only after both children and its own
/// backend completed
#[test]
fn completion_bubbling_waits_for_all() {
    let mut host = MockHost::native();
    let first_el = host.element();
    let second_el = host.element();
    let parent_el = host.element();
    let mut animator = Animator::default();

    let first = animator
        .new_animation()
        .add_element(first_el)
        .from_to("opacity", "0", "1")
        .id();
    let second = animator
        .new_animation()
        .add_element(second_el)
        .from_to("opacity", "0", "1")
        .id();

    let finished = Rc::new(RefCell::new(0u32));
    let counter = finished.clone();
    let parent = animator
        .new_animation()
        .add_element(parent_el)
        .from_to("opacity", "0", "1")
        .duration(100.0)
        .add_animations(&[first, second])
        .on_finish(move |_| *counter.borrow_mut() += 1)
        .id();

    animator.play(parent, &mut host);

    animator.animation_finish(first, &mut host);
    assert_eq!(*finished.borrow(), 0);
    animator.animation_finish(second, &mut host);
    assert_eq!(*finished.borrow(), 0);
    animator.animation_finish(parent, &mut host);
    assert_eq!(*finished.borrow(), 1);
}

/// it should clamp progress steps into [0, 0.99]
#[test]
fn progress_clamp() {
    let mut host = MockHost::native();
    let element = host.element();
    let mut animator = Animator::default();
    let id = animator
        .new_animation()
        .add_element(element)
        .from_to("opacity", "0", "1")
        .duration(200.0)
        .id();

    animator.progress_start(id, true, &mut host);
    let handle = host.animation_order[0];

    animator.progress_step(id, 1.5, &mut host);
    assert_eq!(host.animations[&handle].current_time, Some(200.0 * 0.99));
    assert_eq!(host.animations[&handle].state, MockPlayState::Paused);

    animator.progress_step(id, 1.0, &mut host);
    assert_eq!(host.animations[&handle].current_time, Some(200.0 * 0.99));

    animator.progress_step(id, -1.0, &mut host);
    assert_eq!(host.animations[&handle].current_time, Some(0.0));
}

/// it should scrub the CSS backend with a negative animation-delay
#[test]
fn progress_step_css() {
    let mut host = MockHost::css_only();
    let element = host.element();
    let mut animator = Animator::default();
    let id = animator
        .new_animation()
        .add_element(element)
        .from_to("opacity", "0", "1")
        .duration(200.0)
        .id();

    animator.progress_start(id, true, &mut host);
    assert_eq!(
        host.style(element, "animation-timing-function"),
        Some("linear")
    );
    assert_eq!(host.style(element, "animation-play-state"), Some("paused"));

    animator.progress_step(id, 0.5, &mut host);
    let expected = format!("-{}ms", 200.0 * 0.5);
    assert_eq!(
        host.style(element, "animation-delay"),
        Some(expected.as_str())
    );
    assert_eq!(host.style(element, "animation-play-state"), Some("paused"));
}

/// it should survive double stop and fully re-initialize on the next play
#[test]
fn stop_idempotence_and_reinit() {
    let mut host = MockHost::css_only();
    let element = host.element();
    let mut animator = Animator::default();
    let id = animator
        .new_animation()
        .add_element(element)
        .from_to("opacity", "0", "1")
        .duration(120.0)
        .id();

    animator.play(id, &mut host);
    assert_eq!(host.active_stylesheets(), 1);

    animator.stop(id, &mut host);
    animator.stop(id, &mut host);
    assert_eq!(host.active_stylesheets(), 0);
    assert_eq!(host.style(element, "animation-name"), None);
    assert!(!animator.is_initialized(id));

    animator.play(id, &mut host);
    // A fresh stylesheet, not a reused stale handle.
    assert_eq!(host.stylesheet_order.len(), 2);
    assert_eq!(host.active_stylesheets(), 1);
    assert!(animator.is_initialized(id));
}

/// it should keep a paused node initialized and resume it without
/// allocating new backend resources
#[test]
fn pause_keeps_resources() {
    let mut host = MockHost::native();
    let element = host.element();
    let mut animator = Animator::default();
    let id = animator
        .new_animation()
        .add_element(element)
        .from_to("opacity", "0", "1")
        .duration(100.0)
        .id();

    animator.play(id, &mut host);
    let handle = host.animation_order[0];
    animator.pause(id, &mut host);
    assert_eq!(host.animations[&handle].state, MockPlayState::Paused);
    assert!(animator.is_initialized(id));

    animator.play(id, &mut host);
    assert_eq!(host.animations[&handle].state, MockPlayState::Running);
    assert_eq!(host.animation_order.len(), 1);
}

/// it should treat a zero-keyframe parent as a structural group that
/// completes only after its children
#[test]
fn structural_parent_completes_after_children() {
    let mut host = MockHost::native();
    let child_el = host.element();
    let mut animator = Animator::default();

    let finished = Rc::new(RefCell::new(0u32));
    let counter = finished.clone();
    let child = animator
        .new_animation()
        .add_element(child_el)
        .from_to("opacity", "0", "1")
        .id();
    let parent = animator
        .new_animation()
        .duration(300.0)
        .add_animation(child)
        .on_finish(move |_| *counter.borrow_mut() += 1)
        .id();

    animator.play(parent, &mut host);

    // No backend for the structural parent; only the child is watched.
    assert_eq!(host.animation_order.len(), 1);
    assert_eq!(host.watched_nodes(), vec![child]);
    assert_eq!(*finished.borrow(), 0);

    animator.animation_finish(child, &mut host);
    assert_eq!(*finished.borrow(), 1);
}

/// it should complete play_sync on the same tick, clear the override, and
/// use the authored duration on the next play
#[test]
fn play_sync_completes_synchronously() {
    let mut host = MockHost::native();
    let parent_el = host.element();
    let child_el = host.element();
    let mut animator = Animator::default();
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let child = animator
        .new_animation()
        .add_element(child_el)
        .from_to("opacity", "0", "1")
        .id();
    animator.on_finish(child, {
        let log = log.clone();
        move |_| log.borrow_mut().push("child")
    });
    let parent = animator
        .new_animation()
        .add_element(parent_el)
        .from_to("opacity", "0", "1")
        .duration(300.0)
        .add_animation(child)
        .id();
    animator.on_finish(parent, {
        let log = log.clone();
        move |_| log.borrow_mut().push("parent")
    });

    animator.play_sync(parent, &mut host);

    // The whole tree completed inside the call, children first, without
    // touching a backend.
    assert_eq!(*log.borrow(), vec!["child", "parent"]);
    assert_eq!(host.animation_order.len(), 0);

    // The override cleared itself; a normal play uses the authored timing.
    assert_eq!(animator.get_duration(parent), Some(300.0));
    animator.play(parent, &mut host);
    let last = *host.animation_order.last().unwrap();
    assert_eq!(host.animations[&last].timing.duration, Some(300.0));
}

/// it should rebuild the backend with authored easing after progress_end
#[test]
fn progress_end_restores_authored_easing() {
    let mut host = MockHost::css_only();
    let element = host.element();
    let mut animator = Animator::default();
    let id = animator
        .new_animation()
        .add_element(element)
        .from_to("opacity", "0", "1")
        .duration(200.0)
        .easing("ease-in-out")
        .id();

    animator.progress_start(id, true, &mut host);
    assert_eq!(
        host.style(element, "animation-timing-function"),
        Some("linear")
    );

    animator.progress_end(id, true, 0.3, &mut host);
    assert_eq!(
        host.style(element, "animation-timing-function"),
        Some("ease-in-out")
    );
    assert_eq!(host.style(element, "animation-play-state"), Some("running"));
}

/// it should make a destroyed subtree permanently inert
#[test]
fn destroy_is_permanent_and_recursive() {
    let mut host = MockHost::native();
    let parent_el = host.element();
    let child_el = host.element();
    let mut animator = Animator::default();

    let child = animator
        .new_animation()
        .add_element(child_el)
        .from_to("opacity", "0", "1")
        .id();
    let parent = animator
        .new_animation()
        .add_element(parent_el)
        .from_to("opacity", "0", "1")
        .duration(100.0)
        .add_animation(child)
        .id();

    animator.play(parent, &mut host);
    animator.destroy(parent, &mut host);

    for handle in &host.animation_order {
        assert_eq!(host.animations[handle].state, MockPlayState::Cancelled);
    }
    assert_eq!(animator.children_of(parent), &[] as &[NodeId]);
    assert_eq!(animator.parent_of(child), None);

    // Commands on destroyed nodes are no-ops.
    let created_before = host.animation_order.len();
    animator.play(parent, &mut host);
    animator.play(child, &mut host);
    assert_eq!(host.animation_order.len(), created_before);
}

/// it should skip a second stylesheet injection for the same name in the
/// same root
#[test]
fn stylesheet_injection_deduplicates() {
    let mut host = MockHost::css_only();
    let first_el = host.element();
    let second_el = host.element();
    let mut animator = Animator::default();

    let first = animator
        .new_animation()
        .add_element(first_el)
        .from_to("opacity", "0", "1")
        .duration(80.0)
        .name("shared-fade")
        .id();
    let second = animator
        .new_animation()
        .add_element(second_el)
        .from_to("opacity", "0", "1")
        .duration(80.0)
        .name("shared-fade")
        .id();

    animator.play(first, &mut host);
    animator.play(second, &mut host);

    assert_eq!(host.active_stylesheets(), 1);
    assert_eq!(host.style(first_el, "animation-name"), Some("shared-fade"));
    assert_eq!(host.style(second_el, "animation-name"), Some("shared-fade"));
}

/// it should reject adds that would create a cycle and keep the tree intact
#[test]
fn cycle_adds_rejected() {
    let mut animator = Animator::default();
    let child = animator.create_animation();
    let parent = animator.create_animation();

    animator.add_animation(parent, child);
    animator.add_animation(child, parent);
    animator.add_animation(parent, parent);

    assert_eq!(animator.children_of(parent), &[child]);
    assert_eq!(animator.children_of(child), &[] as &[NodeId]);
    assert_eq!(animator.parent_of(parent), None);
}

/// it should detach a child from its previous parent when re-adding
#[test]
fn reparenting_detaches_first() {
    let mut animator = Animator::default();
    let child = animator.create_animation();
    let first = animator.create_animation();
    let second = animator.create_animation();

    animator.add_animation(first, child);
    animator.add_animation(second, child);

    assert_eq!(animator.children_of(first), &[] as &[NodeId]);
    assert_eq!(animator.children_of(second), &[child]);
    assert_eq!(animator.parent_of(child), Some(second));
}

/// it should resolve play_async's completion latch when the tree finishes
#[test]
fn play_async_latch() {
    let mut host = MockHost::native();
    let element = host.element();
    let mut animator = Animator::default();
    let id = animator
        .new_animation()
        .add_element(element)
        .from_to("opacity", "0", "1")
        .duration(50.0)
        .id();

    let completion = animator.play_async(id, &mut host);
    assert!(!completion.is_complete());

    animator.animation_finish(id, &mut host);
    assert!(completion.is_complete());
}

/// it should run before hooks in read-then-write order ahead of backend work
#[test]
fn before_hooks_order_and_classes() {
    let mut host = MockHost::css_only();
    let element = host.element();
    let mut animator = Animator::default();
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let id = animator
        .new_animation()
        .add_element(element)
        .from_to("opacity", "0", "1")
        .duration(60.0)
        .before_add_class("is-animating")
        .after_remove_class("is-animating")
        .id();
    animator.before_add_write(id, {
        let log = log.clone();
        move || log.borrow_mut().push("write")
    });
    animator.before_add_read(id, {
        let log = log.clone();
        move || log.borrow_mut().push("read")
    });

    animator.play(id, &mut host);
    assert_eq!(*log.borrow(), vec!["read", "write"]);
    assert!(host.has_class(element, "is-animating"));

    animator.animation_finish(id, &mut host);
    assert!(!host.has_class(element, "is-animating"));
}

/// it should model clear-styles as empty-string inline values
#[test]
fn clear_styles_sets_empty_values() {
    let mut host = MockHost::css_only();
    let element = host.element();
    let mut animator = Animator::default();

    let id = animator
        .new_animation()
        .add_element(element)
        .from_to("opacity", "0", "1")
        .duration(60.0)
        .before_clear_styles(&["pointer-events".to_string()])
        .id();

    animator.play(id, &mut host);
    assert_eq!(host.style(element, "pointer-events"), Some(""));
}

/// it should adopt elements resolved from a selector via add_target
#[test]
fn add_target_resolves_selector() {
    let mut host = MockHost::native();
    let a = host.element();
    let b = host.element();
    host.register_selector(".card", vec![a, b]);

    let mut animator = Animator::default();
    let id = animator.create_animation();
    animator.add_target(id, ".card", &mut host);
    animator.from_to(id, "opacity", "0", "1");
    animator.set_duration(id, 90.0);

    animator.play(id, &mut host);
    assert_eq!(host.animation_order.len(), 2);
    // Only the first element's animation carries the finish watch.
    assert_eq!(host.finish_watches.len(), 1);
}
