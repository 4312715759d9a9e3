use playground_scene::core::hooks::UpdateHooks;

#[test]
fn test_hooks_invoked_exactly_once_per_run() {
    let mut hooks: UpdateHooks<Vec<usize>> = UpdateHooks::new();
    for id in 0..5 {
        hooks.register(move |calls, _| calls.push(id));
    }

    let mut calls = Vec::new();
    hooks.run_all(&mut calls, 1.0);

    assert_eq!(calls, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_every_hook_receives_the_same_time() {
    let mut hooks: UpdateHooks<Vec<f32>> = UpdateHooks::new();
    hooks.register(|times, t| times.push(t));
    hooks.register(|times, t| times.push(t));
    hooks.register(|times, t| times.push(t));

    let mut times = Vec::new();
    hooks.run_all(&mut times, 5.0);

    assert_eq!(times, vec![5.0, 5.0, 5.0]);
}

#[test]
fn test_order_is_call_invariant() {
    let mut hooks: UpdateHooks<Vec<&'static str>> = UpdateHooks::new();
    hooks.register(|order, _| order.push("c1"));
    hooks.register(|order, _| order.push("c2"));
    hooks.register(|order, _| order.push("c3"));

    let mut order = Vec::new();
    hooks.run_all(&mut order, 1.0);
    hooks.run_all(&mut order, 2.0);

    assert_eq!(order, vec!["c1", "c2", "c3", "c1", "c2", "c3"]);
}

#[test]
fn test_empty_registry_run_is_a_noop() {
    let mut hooks: UpdateHooks<Vec<f32>> = UpdateHooks::new();
    let mut context = Vec::new();

    hooks.run_all(&mut context, 123.0);

    assert!(context.is_empty());
    assert!(hooks.is_empty());
}

#[test]
fn test_recorded_argument_matches_run_time() {
    struct Recorder {
        last_seen: Option<f32>,
    }

    let mut hooks: UpdateHooks<Recorder> = UpdateHooks::new();
    hooks.register(|recorder, t| recorder.last_seen = Some(t));

    let mut recorder = Recorder { last_seen: None };
    hooks.run_all(&mut recorder, 5.0);

    assert_eq!(recorder.last_seen, Some(5.0));
}

#[test]
fn test_second_hook_sees_first_hooks_write_in_same_frame() {
    struct Shared {
        written: f32,
        observed: f32,
    }

    let mut hooks: UpdateHooks<Shared> = UpdateHooks::new();
    hooks.register(|shared, t| shared.written = t * 2.0);
    hooks.register(|shared, _| shared.observed = shared.written);

    let mut shared = Shared {
        written: 0.0,
        observed: -1.0,
    };
    hooks.run_all(&mut shared, 3.0);

    assert_eq!(shared.observed, 6.0);
}

#[test]
fn test_sine_driven_hook_is_pure_in_time() {
    // A sin(t/500)-driven position must match direct recomputation for
    // every sampled time, regardless of how many frames ran before it.
    let mut hooks: UpdateHooks<Vec<(f32, f32)>> = UpdateHooks::new();
    hooks.register(|samples, t| samples.push((t, 400.0 * (t / 500.0).sin())));

    let mut samples = Vec::new();
    for frame in 0..100 {
        let t = frame as f32 * 16.0;
        hooks.run_all(&mut samples, t);
    }

    assert_eq!(samples.len(), 100);
    for (t, value) in samples {
        assert_eq!(value, 400.0 * (t / 500.0).sin());
    }
}
