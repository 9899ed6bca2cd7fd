//! Distinct-group ("firewall") counting.
//!
//! A group is a maximal run of same-type agents on the ring.  Walking the
//! ring once and counting positions where the type changes gives the number
//! of boundaries; the wrap from the last agent back to the first is counted
//! only when those two differ.  On a ring every group is bounded by two
//! boundaries and every boundary is shared by two groups, so the boundary
//! count equals the group count, except for a uniform ring, which has no
//! boundaries and exactly one group.

use sg_core::Lattice;

/// Number of maximal same-type runs on the ring.  `0` only for an empty
/// lattice.
pub fn count_distinct(lattice: &Lattice) -> u64 {
    let agents = lattice.as_slice();
    let (Some(first), Some(last)) = (agents.first(), agents.last()) else {
        return 0;
    };

    let internal = agents.windows(2).filter(|w| w[0] != w[1]).count() as u64;
    let boundaries = internal + u64::from(first != last);

    boundaries.max(1)
}
