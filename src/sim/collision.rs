//! Collision and combat resolution
//!
//! Runs once per tick after movement and weapon fire. Every hit test is
//! circle-vs-circle: a body's half-extent is its radius. Removal never
//! happens mid-iteration; each pass builds the surviving list instead, so a
//! projectile kills at most one adversary (the first in list order).

use glam::Vec2;
use rand::Rng;

use super::state::{PickupKind, SimEvent, SimulationState};

/// Strict circle overlap test
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Friendly projectiles: drop off-playfield shots, then kill the first
/// adversary each remaining shot touches.
pub fn resolve_projectile_hits(state: &mut SimulationState) {
    let shots = std::mem::take(&mut state.projectiles);
    let mut survivors = Vec::with_capacity(shots.len());

    for shot in shots {
        if !state.playfield.contains(shot.pos) {
            continue;
        }
        let hit = state.adversaries.iter().position(|a| {
            a.is_alive() && circles_overlap(shot.pos, shot.radius, a.pos, a.extent / 2.0)
        });
        match hit {
            Some(index) => kill_adversary(state, index),
            None => survivors.push(shot),
        }
    }

    state.projectiles = survivors;
}

/// Mark an adversary dead, count the kill and roll for loot
fn kill_adversary(state: &mut SimulationState, index: usize) {
    let adversary = &mut state.adversaries[index];
    adversary.health = 0;
    let (id, pos) = (adversary.id, adversary.pos);

    state.kills += 1;
    log::debug!("Adversary {} killed at ({:.0}, {:.0})", id, pos.x, pos.y);
    state.emit(SimEvent::AdversaryKilled { id, pos });

    if state.rng.random::<f64>() < state.tuning.weapon.loot_chance {
        let kind = if state.rng.random::<f64>() < 0.5 {
            PickupKind::RapidAmmo
        } else {
            PickupKind::ScatterAmmo
        };
        state.spawn_pickup(pos, kind);
        state.emit(SimEvent::LootDropped { kind, pos });
    }
}

/// Barrage shots: a hit costs the Agent fixed damage and consumes the shot;
/// misses are kept until they leave the padded playfield.
pub fn resolve_hostile_hits(state: &mut SimulationState) {
    let damage = state.tuning.projectile.hostile_damage;
    let margin = state.tuning.projectile.hostile_offscreen_margin;
    let shots = std::mem::take(&mut state.hostile_projectiles);
    let mut survivors = Vec::with_capacity(shots.len());

    for shot in shots {
        let agent = &mut state.agent;
        if circles_overlap(shot.pos, shot.radius, agent.pos, agent.extent / 2.0) {
            agent.health -= damage;
            state.events.push(SimEvent::AgentDamaged { amount: damage });
            continue;
        }
        if state.playfield.contains_with_margin(shot.pos, margin) {
            survivors.push(shot);
        }
    }

    state.hostile_projectiles = survivors;
}

/// Every overlapping adversary drains health each tick from the Agent and
/// from any ally it touches, bound or free. Dead adversaries and allies are
/// removed afterwards.
pub fn resolve_contact_damage(state: &mut SimulationState) {
    let damage = state.tuning.adversary.contact_damage;
    let mut drained = 0;

    for adversary in state.adversaries.iter().filter(|a| a.is_alive()) {
        let reach = adversary.extent / 2.0;
        let agent = &mut state.agent;
        if circles_overlap(adversary.pos, reach, agent.pos, agent.extent / 2.0) {
            agent.health -= damage;
            drained += damage;
        }
        for ally in state.allies.iter_mut() {
            if circles_overlap(adversary.pos, reach, ally.pos, ally.extent / 2.0) {
                ally.health -= damage;
            }
        }
    }

    if drained > 0 {
        state.emit(SimEvent::AgentDamaged { amount: drained });
    }

    state.adversaries.retain(|a| a.is_alive());

    let (alive, lost): (Vec<_>, Vec<_>) = std::mem::take(&mut state.allies)
        .into_iter()
        .partition(|ally| ally.health > 0);
    state.allies = alive;
    for ally in lost {
        log::info!("Ally {} lost", ally.id);
        state.emit(SimEvent::AllyLost { id: ally.id });
    }
}

/// Pickups touching the Agent refill the matching ammo pool
pub fn collect_pickups(state: &mut SimulationState) {
    let amount = state.tuning.weapon.pickup_ammo;
    let pickups = std::mem::take(&mut state.pickups);
    let mut remaining = Vec::with_capacity(pickups.len());

    for pickup in pickups {
        let agent = &mut state.agent;
        if !circles_overlap(pickup.pos, pickup.extent / 2.0, agent.pos, agent.extent / 2.0) {
            remaining.push(pickup);
            continue;
        }
        match pickup.kind {
            PickupKind::RapidAmmo => agent.weapon.rapid_ammo += amount,
            PickupKind::ScatterAmmo => agent.weapon.scatter_ammo += amount,
        }
        log::debug!("Collected {:?} (+{})", pickup.kind, amount);
        state.events.push(SimEvent::PickupCollected {
            kind: pickup.kind,
            amount,
        });
    }

    state.pickups = remaining;
}

/// Collision phase of a tick
pub fn resolve_collisions(state: &mut SimulationState) {
    resolve_projectile_hits(state);
    resolve_hostile_hits(state);
    resolve_contact_damage(state);
    collect_pickups(state);
}
