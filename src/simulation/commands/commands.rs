use crate::domain::error::EngineError;

use super::SandCore;

pub(super) fn activate(core: &mut SandCore, row: i32, col: i32) -> bool {
    let Some(idx) = core.grid.index_of(row, col) else {
        return false;
    };

    // Already a grain: keep its hue and velocity.
    if !core.grid.is_empty_idx(idx) {
        return true;
    }

    let hue = core.hue_cursor.next_hue();
    core.grid.spawn_grain(idx, hue);
    core.grain_count += 1;
    core.dirty = true;
    true
}

pub(super) fn activate_region(
    core: &mut SandCore,
    center_row: i32,
    center_col: i32,
    size: i32,
) -> Result<(), EngineError> {
    if size <= 0 {
        console_warn!("activate_region: rejected brush size {}", size);
        return Err(EngineError::InvalidArgument { size });
    }

    // Odd sizes cover [-extent, extent], even sizes [-extent, extent).
    let extent = size / 2;
    let upper = if size % 2 == 1 { extent } else { extent - 1 };

    for dr in -extent..=upper {
        for dc in -extent..=upper {
            activate(core, center_row.saturating_add(dr), center_col.saturating_add(dc));
        }
    }
    Ok(())
}

pub(super) fn clear(core: &mut SandCore) {
    core.grid.clear();
    core.grain_count = 0;
    core.frame = 0;
}
