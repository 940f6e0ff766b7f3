use glam::Vec2;

/// Outcome of a disk-disk impact: the half-overlap displacement to add to
/// the first disk's position (and subtract from the second's), plus both
/// post-impact velocities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DiskImpact {
    pub separation: Vec2,
    pub vel1: Vec2,
    pub vel2: Vec2,
}

/// Resolves a collision between two disks, if they overlap.
///
/// De-penetration pushes each disk half the overlap apart along the contact
/// normal. Velocities are exchanged along the normal with the 1-D collision
/// equations for unequal masses; a `restitution` of 1 keeps the exchange
/// perfectly elastic, 0 makes it perfectly inelastic. Tangential components
/// are untouched.
#[allow(clippy::too_many_arguments)]
pub(crate) fn resolve_disk_collision(
    pos1: Vec2,
    vel1: Vec2,
    mass1: f32,
    radius1: f32,
    pos2: Vec2,
    vel2: Vec2,
    mass2: f32,
    radius2: f32,
    restitution: f32,
) -> Option<DiskImpact> {
    let mut delta = pos1 - pos2;
    let mut distance = delta.length();

    // Exactly coincident centers give no usable normal, substitute one
    if distance == 0. {
        delta = Vec2::X;
        distance = 1.;
    }

    let min_distance = radius1 + radius2;
    if distance >= min_distance {
        return None;
    }

    let normal = delta / distance;
    let overlap = min_distance - distance;

    let va = vel1.dot(normal);
    let vb = vel2.dot(normal);

    let mass_sum = mass1 + mass2;
    let va_after = (va * (mass1 - restitution * mass2) + (1. + restitution) * mass2 * vb) / mass_sum;
    let vb_after = (vb * (mass2 - restitution * mass1) + (1. + restitution) * mass1 * va) / mass_sum;

    Some(DiskImpact {
        separation: normal * (overlap * 0.5),
        vel1: vel1 + (va_after - va) * normal,
        vel2: vel2 + (vb_after - vb) * normal,
    })
}
