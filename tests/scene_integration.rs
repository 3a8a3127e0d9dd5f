//! Scene layout and placement integration tests: the kinematics and
//! projection layers exercised through the ECS systems, without a window.

use bevy_ecs::prelude::*;

use motionboard::components::agent::Agent;
use motionboard::components::drawable::Drawable;
use motionboard::components::dynamictext::DynamicText;
use motionboard::components::scenepos::ScenePosition;
use motionboard::components::scenerole::SceneRole;
use motionboard::kinematics::Role;
use motionboard::problem::{Direction, MovementParams, ProblemData, SceneType};
use motionboard::resources::activeproblem::ActiveProblem;
use motionboard::resources::playback::Playback;
use motionboard::resources::screensize::ScreenSize;
use motionboard::resources::worldtime::WorldTime;
use motionboard::systems::layout::scene_layout_system;
use motionboard::systems::placement::{CANVAS_PADDING, scene_placement_system};

const EPSILON: f32 = 0.5; // screen-pixel tolerance

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn movement_problem(id: &str, direction: Direction) -> ProblemData {
    ProblemData {
        id: id.to_string(),
        scene_type: SceneType::Movement,
        title: "直线相遇问题".to_string(),
        source: None,
        question: "甲、乙两车同时出发。".to_string(),
        analysis: String::new(),
        solution_steps: vec![],
        answer: "3小时".to_string(),
        movement_params: Some(MovementParams {
            object_a_name: "甲车".to_string(),
            object_b_name: "乙车".to_string(),
            speed_a: 40.0,
            speed_b: 60.0,
            initial_distance: 300.0,
            direction,
            total_time: 3.5,
            meeting_time: Some(3.0),
        }),
        geometry_params: None,
    }
}

fn work_problem(id: &str) -> ProblemData {
    ProblemData {
        id: id.to_string(),
        scene_type: SceneType::Work,
        title: "基础工程问题".to_string(),
        source: None,
        question: "q".to_string(),
        analysis: String::new(),
        solution_steps: vec![],
        answer: "9天".to_string(),
        movement_params: None,
        geometry_params: None,
    }
}

fn round_trip_problem(id: &str) -> ProblemData {
    let mut p = movement_problem(id, Direction::Opposite);
    p.question = "相遇后继续前进，到达对方起点后立即返回。".to_string();
    let params = p.movement_params.as_mut().unwrap();
    params.speed_a = 60.0;
    params.speed_b = 80.0;
    params.initial_distance = 140.0;
    params.total_time = 3.0;
    params.meeting_time = Some(1.0);
    p
}

fn make_world(problem: ProblemData) -> (World, Schedule) {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(Playback::new());
    world.insert_resource(ScreenSize { w: 800, h: 600 });
    world.insert_resource(ActiveProblem::new(problem, 0));

    let mut schedule = Schedule::default();
    schedule.add_systems(scene_layout_system);
    schedule.add_systems(scene_placement_system.after(scene_layout_system));
    (world, schedule)
}

fn agent_x(world: &mut World, role: Role) -> f32 {
    let mut q = world.query::<(&Agent, &ScenePosition)>();
    q.iter(world)
        .find(|(a, _)| a.role == role)
        .map(|(_, p)| p.pos.x)
        .expect("agent missing")
}

fn role_drawable(world: &mut World, role: SceneRole) -> Drawable {
    let mut q = world.query::<(&SceneRole, &Drawable)>();
    q.iter(world)
        .find(|(r, _)| **r == role)
        .map(|(_, d)| *d)
        .expect("scene role missing")
}

fn role_text(world: &mut World, role: SceneRole) -> String {
    let mut q = world.query::<(&SceneRole, &DynamicText)>();
    q.iter(world)
        .find(|(r, _)| **r == role)
        .map(|(_, t)| t.content.clone())
        .expect("scene role missing")
}

#[test]
fn layout_spawns_agents_and_labels_for_motion_problem() {
    let (mut world, mut schedule) = make_world(movement_problem("meet", Direction::Opposite));
    schedule.run(&mut world);

    let mut agents = world.query::<&Agent>();
    assert_eq!(agents.iter(&world).count(), 2);
    assert_eq!(role_text(&mut world, SceneRole::NameLabelA), "甲车");
    assert_eq!(role_text(&mut world, SceneRole::NameLabelB), "乙车");
    assert_eq!(role_text(&mut world, SceneRole::SpeedLabelA), "v=40");
    assert_eq!(role_text(&mut world, SceneRole::SpeedLabelB), "v=60");
}

#[test]
fn layout_spawns_nothing_for_work_problem() {
    let (mut world, mut schedule) = make_world(work_problem("work"));
    schedule.run(&mut world);

    let mut agents = world.query::<&Agent>();
    assert_eq!(agents.iter(&world).count(), 0);
    let mut drawables = world.query::<&Drawable>();
    assert_eq!(drawables.iter(&world).count(), 0);
}

#[test]
fn placement_puts_entities_at_track_ends_at_progress_zero() {
    let (mut world, mut schedule) = make_world(movement_problem("meet", Direction::Opposite));
    schedule.run(&mut world);

    // Span is (40+60)*3.5*1.2 = 420 logical units over 700 px.
    let scale = 700.0 / 420.0;
    assert!(approx_eq(agent_x(&mut world, Role::A), CANVAS_PADDING));
    assert!(approx_eq(
        agent_x(&mut world, Role::B),
        CANVAS_PADDING + 300.0 * scale
    ));
    assert_eq!(role_text(&mut world, SceneRole::DistanceLabel), "距离: 300");
}

#[test]
fn placement_converges_entities_at_meeting_time() {
    let (mut world, mut schedule) = make_world(movement_problem("meet", Direction::Opposite));
    // progress = meeting_time / total_time.
    world.resource_mut::<Playback>().seek(3.0 / 3.5);
    schedule.run(&mut world);

    let ax = agent_x(&mut world, Role::A);
    let bx = agent_x(&mut world, Role::B);
    assert!(approx_eq(ax, bx));
    // At zero separation the annotation disappears.
    assert_eq!(role_text(&mut world, SceneRole::DistanceLabel), "");
    assert!(!role_drawable(&mut world, SceneRole::DistanceConnector).visible);
}

#[test]
fn event_marker_appears_only_after_meeting_time() {
    let (mut world, mut schedule) = make_world(movement_problem("meet", Direction::Opposite));
    world.resource_mut::<Playback>().seek(0.5);
    schedule.run(&mut world);
    assert!(!role_drawable(&mut world, SceneRole::EventFlag).visible);
    assert_eq!(role_text(&mut world, SceneRole::EventLabel), "");

    world.resource_mut::<Playback>().seek(1.0);
    schedule.run(&mut world);
    assert!(role_drawable(&mut world, SceneRole::EventFlag).visible);
    assert_eq!(role_text(&mut world, SceneRole::EventLabel), "相遇/追上点");
}

#[test]
fn round_trip_problem_shows_walls_and_stays_in_bounds() {
    let (mut world, mut schedule) = make_world(round_trip_problem("shuttle"));
    schedule.run(&mut world);
    assert!(role_drawable(&mut world, SceneRole::WallLeft).visible);
    assert!(role_drawable(&mut world, SceneRole::WallRight).visible);

    // Sweep playback; both agents must stay between the walls.
    for i in 0..=20 {
        world.resource_mut::<Playback>().seek(i as f32 / 20.0);
        schedule.run(&mut world);
        for role in [Role::A, Role::B] {
            let x = agent_x(&mut world, role);
            assert!((CANVAS_PADDING - 1.0..=750.0 + 1.0).contains(&x), "x={x}");
        }
    }
}

#[test]
fn straight_meeting_problem_hides_walls() {
    let (mut world, mut schedule) = make_world(movement_problem("meet", Direction::Opposite));
    schedule.run(&mut world);
    assert!(!role_drawable(&mut world, SceneRole::WallLeft).visible);
    assert!(!role_drawable(&mut world, SceneRole::WallRight).visible);
}

#[test]
fn chase_problem_moves_both_agents_right() {
    let (mut world, mut schedule) = make_world(movement_problem("chase", Direction::Same));
    schedule.run(&mut world);
    let a0 = agent_x(&mut world, Role::A);
    let b0 = agent_x(&mut world, Role::B);

    world.resource_mut::<Playback>().seek(0.5);
    schedule.run(&mut world);
    assert!(agent_x(&mut world, Role::A) > a0);
    assert!(agent_x(&mut world, Role::B) > b0);

    let mut agents = world.query::<&Agent>();
    for agent in agents.iter(&world) {
        assert!(agent.heading > 0.0);
    }
}

#[test]
fn problem_switch_rebuilds_the_scene() {
    let (mut world, mut schedule) = make_world(movement_problem("meet", Direction::Opposite));
    schedule.run(&mut world);
    let mut agents = world.query::<&Agent>();
    assert_eq!(agents.iter(&world).count(), 2);

    world
        .resource_mut::<ActiveProblem>()
        .set(work_problem("work"), 1);
    schedule.run(&mut world);
    // One more run so the despawn commands from the rebuild are applied.
    schedule.run(&mut world);

    let mut agents = world.query::<&Agent>();
    assert_eq!(agents.iter(&world).count(), 0);

    world
        .resource_mut::<ActiveProblem>()
        .set(movement_problem("meet2", Direction::Opposite), 0);
    schedule.run(&mut world);
    schedule.run(&mut world);
    let mut agents = world.query::<&Agent>();
    assert_eq!(agents.iter(&world).count(), 2);
}
