use kinetic_animation_core::{Animator, Direction, Fill, Keyframe};
use kinetic_test_fixtures::MockHost;

/// it should merge repeated from() calls into a single offset-0 keyframe
#[test]
fn keyframe_merge_idempotence() {
    let mut animator = Animator::default();
    let id = animator
        .new_animation()
        .from("opacity", "0")
        .from("transform", "translateX(40px)")
        .id();

    let keyframes = animator.get_keyframes(id);
    assert_eq!(keyframes.len(), 1);
    assert_eq!(keyframes[0].offset, 0.0);
    assert_eq!(keyframes[0].styles["opacity"], "0");
    assert_eq!(keyframes[0].styles["transform"], "translateX(40px)");
}

/// it should expand from_to into exactly the two boundary keyframes
#[test]
fn from_to_builds_boundaries() {
    let mut animator = Animator::default();
    let id = animator.new_animation().from_to("opacity", "0", "1").id();

    assert_eq!(
        animator.get_keyframes(id),
        &[
            Keyframe::at(0.0).style("opacity", "0"),
            Keyframe::at(1.0).style("opacity", "1"),
        ]
    );
}

/// it should replace the keyframe list wholesale via keyframes()
#[test]
fn keyframes_replace_wholesale() {
    let mut animator = Animator::default();
    let id = animator
        .new_animation()
        .from_to("opacity", "0", "1")
        .keyframes(vec![
            Keyframe::at(0.2).style("opacity", "0.2"),
            Keyframe::at(0.8).style("opacity", "0.8"),
        ])
        .id();

    let keyframes = animator.get_keyframes(id);
    assert_eq!(keyframes.len(), 2);
    assert_eq!(keyframes[0].offset, 0.2);
    assert_eq!(keyframes[1].offset, 0.8);
}

/// it should resolve a child's unset duration from the parent chain
#[test]
fn timing_inheritance() {
    let mut animator = Animator::default();
    let child = animator.new_animation().id();
    let parent = animator
        .new_animation()
        .duration(300.0)
        .add_animation(child)
        .id();

    assert_eq!(animator.get_duration(child), Some(300.0));

    animator.set_duration(child, 150.0);
    assert_eq!(animator.get_duration(child), Some(150.0));
    assert_eq!(animator.get_duration(parent), Some(300.0));
}

/// it should resolve every unset property to None at the root
#[test]
fn unset_chain_resolves_none() {
    let mut animator = Animator::default();
    let id = animator.create_animation();

    assert_eq!(animator.get_duration(id), None);
    assert_eq!(animator.get_delay(id), None);
    assert_eq!(animator.get_easing(id), None);
    assert_eq!(animator.get_iterations(id), None);
    assert_eq!(animator.get_direction(id), None);
}

/// it should default a fresh node's fill to forwards
#[test]
fn fill_defaults_forwards() {
    let mut animator = Animator::default();
    let id = animator.create_animation();
    assert_eq!(animator.get_fill(id), Some(Fill::Forwards));
}

/// it should inherit delay, easing, iterations, and direction like duration
#[test]
fn full_property_inheritance() {
    let mut animator = Animator::default();
    let child = animator.new_animation().id();
    let _parent = animator
        .new_animation()
        .delay(40.0)
        .easing("ease-in-out")
        .iterations(2.0)
        .direction(Direction::Alternate)
        .add_animation(child)
        .id();

    assert_eq!(animator.get_delay(child), Some(40.0));
    assert_eq!(animator.get_easing(child).as_deref(), Some("ease-in-out"));
    assert_eq!(animator.get_iterations(child), Some(2.0));
    assert_eq!(animator.get_direction(child), Some(Direction::Alternate));
}

/// it should return "linear" while scrubbing and revert after progress_end
#[test]
fn linear_easing_override() {
    let mut host = MockHost::native();
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
    assert_eq!(animator.get_easing(id).as_deref(), Some("linear"));

    animator.progress_end(id, true, 0.5, &mut host);
    assert_eq!(animator.get_easing(id).as_deref(), Some("ease-in-out"));
}

/// it should snapshot all six properties in resolved_timing
#[test]
fn resolved_timing_snapshot() {
    let mut animator = Animator::default();
    let id = animator
        .new_animation()
        .duration(120.0)
        .delay(10.0)
        .easing("ease-out")
        .iterations(f64::INFINITY)
        .fill(Fill::Both)
        .direction(Direction::Reverse)
        .id();

    let timing = animator.resolved_timing(id);
    assert_eq!(timing.duration, Some(120.0));
    assert_eq!(timing.delay, Some(10.0));
    assert_eq!(timing.easing.as_deref(), Some("ease-out"));
    assert_eq!(timing.iterations, Some(f64::INFINITY));
    assert_eq!(timing.fill, Some(Fill::Both));
    assert_eq!(timing.direction, Some(Direction::Reverse));
}

/// it should auto-generate distinct names from the engine's sequence
#[test]
fn generated_names_are_distinct() {
    let mut animator = Animator::default();
    let a = animator.create_animation();
    let b = animator.create_animation();
    assert_ne!(animator.get_name(a), animator.get_name(b));
    assert!(animator.get_name(a).starts_with("kinetic-animation-"));
}
