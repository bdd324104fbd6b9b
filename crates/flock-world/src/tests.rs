//! Unit tests for arena ray queries.

use glam::Vec3;

use flock_core::{AgentId, BoidSnapshot};

use crate::{Arena, BodyKind, BoxFace, HitBody, Ray, RayCaster};

fn boid_at(position: Vec3) -> BoidSnapshot {
    BoidSnapshot { position, velocity: Vec3::ZERO }
}

#[cfg(test)]
mod walls {
    use super::*;

    #[test]
    fn forward_ray_hits_near_wall_with_inward_normal() {
        // Agent near the +Z wall of a half-extent-10 box, looking at it.
        let arena = Arena::new(10.0).unwrap();
        let view = arena.view(&[], AgentId(0));

        let start = Vec3::new(0.0, 0.0, 9.5);
        let end = Vec3::new(0.0, 0.0, 10.5);
        let hits = view.cast(start, end);

        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(hit.body, HitBody::Wall(BoxFace::PosZ));
        assert_eq!(hit.body.kind(), BodyKind::Container);
        // Wall at z=10, segment 9.5 → 10.5: crossing at half the segment.
        assert!((hit.fraction - 0.5).abs() < 1e-5, "fraction {}", hit.fraction);
        // Push away from the wall: negative z component.
        assert!(hit.normal.z < 0.0);
        assert!((hit.point.z - 10.0).abs() < 1e-4);
    }

    #[test]
    fn ray_contained_in_box_hits_nothing() {
        let arena = Arena::new(10.0).unwrap();
        let view = arena.view(&[], AgentId(0));
        let hits = view.cast(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn diagonal_ray_reports_each_crossed_face() {
        let arena = Arena::new(1.0).unwrap();
        let view = arena.view(&[], AgentId(0));
        // Along +X only: exactly one face crossed.
        let hits = view.cast(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].body, HitBody::Wall(BoxFace::PosX));
    }
}

#[cfg(test)]
mod spheres {
    use super::*;

    #[test]
    fn obstacle_entry_point_and_normal() {
        let mut arena = Arena::new(100.0).unwrap();
        arena.add_obstacle(Vec3::new(0.0, 0.0, 5.0), 1.0).unwrap();
        let view = arena.view(&[], AgentId(0));

        let hits = view.cast(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(hit.body.kind(), BodyKind::Obstacle);
        // Sphere surface at z=4 along a 10-long segment.
        assert!((hit.fraction - 0.4).abs() < 1e-5);
        // Entry normal faces the ray origin.
        assert!(hit.normal.z < 0.0);
    }

    #[test]
    fn miss_reports_nothing() {
        let mut arena = Arena::new(100.0).unwrap();
        arena.add_obstacle(Vec3::new(0.0, 10.0, 5.0), 1.0).unwrap();
        let view = arena.view(&[], AgentId(0));
        let hits = view.cast(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn start_inside_obstacle_is_immediate_contact() {
        let mut arena = Arena::new(100.0).unwrap();
        arena.add_obstacle(Vec3::ZERO, 2.0).unwrap();
        let view = arena.view(&[], AgentId(0));
        let hits = view.cast(Vec3::new(0.5, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].fraction, 0.0);
        // Pushed out along center → start.
        assert!(hits[0].normal.x > 0.0);
    }
}

#[cfg(test)]
mod boids {
    use super::*;

    #[test]
    fn casting_agent_never_hits_itself() {
        let arena = Arena::new(100.0).unwrap();
        let boids = vec![boid_at(Vec3::ZERO), boid_at(Vec3::new(0.0, 0.0, 3.0))];
        let view = arena.view(&boids, AgentId(0));

        let hits = view.cast(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].body, HitBody::Boid(AgentId(1)));
        assert_eq!(hits[0].body.kind(), BodyKind::Boid);
    }

    #[test]
    fn cast_many_matches_individual_casts() {
        let arena = Arena::new(10.0).unwrap();
        let boids = vec![boid_at(Vec3::ZERO), boid_at(Vec3::new(2.0, 0.0, 0.0))];
        let view = arena.view(&boids, AgentId(0));

        let rays = [
            Ray::new(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0)),
            Ray::new(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0)),
        ];
        let batched = view.cast_many(&rays);
        assert_eq!(batched.len(), 2);
        for (ray, hits) in rays.iter().zip(&batched) {
            assert_eq!(*hits, view.cast(ray.start, ray.end));
        }
    }
}

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn invalid_geometry_rejected() {
        assert!(Arena::new(0.0).is_err());
        assert!(Arena::new(-1.0).is_err());

        let mut arena = Arena::new(10.0).unwrap();
        assert!(arena.add_obstacle(Vec3::ZERO, 0.0).is_err());
        assert!(arena.set_boid_radius(-0.5).is_err());
    }
}
