//! Floor generation

use rand::Rng;

use super::range::roll_count;
use super::Generator;
use crate::data::NpcPreset;
use crate::world::Floor;

impl Generator<'_> {
    /// Generate a `width` x `height` floor.
    ///
    /// One cell is picked as the boss room before any room is laid out.
    /// Rooms are generated column by column; a room has a south door unless
    /// it is in the top row and an east door unless it is in the last
    /// column. Enemies are then scattered over every cell except the boss
    /// room, and the boss is placed last. Zero dimensions are treated as 1.
    pub fn generate_floor(&self, width: usize, height: usize, rng: &mut impl Rng) -> Floor {
        if width == 0 || height == 0 {
            log::warn!("Floor of {}x{} requested; generating at least one room", width, height);
        }
        let width = width.max(1);
        let height = height.max(1);

        let boss_cell = (rng.gen_range(0..width), rng.gen_range(0..height));
        let mut boss_spec: Option<NpcPreset> = None;

        let mut columns = Vec::with_capacity(width);
        for x in 0..width {
            let mut column = Vec::with_capacity(height);
            for y in 0..height {
                let generated = self.generate_room_for_cell(y != 0, x != width - 1, (x, y) == boss_cell, rng);
                if boss_spec.is_none() {
                    boss_spec = generated.boss;
                }
                column.push(generated.room);
            }
            columns.push(column);
        }

        let mut floor = Floor::new(columns, boss_cell);

        let skipped = self.scatter_enemies(&mut floor, rng);
        log::debug!("{} enemy draws landed in the boss room", skipped);

        let (boss_x, boss_y) = boss_cell;
        match self.spin_npc(boss_x, boss_y, boss_spec.as_ref(), self.config.challenge_rating, rng) {
            Some(boss) => {
                log::info!("The boss '{}' waits at ({}, {})", boss.name, boss_x, boss_y);
                floor.add_npc(boss);
            }
            None => log::debug!("No boss placed on this floor"),
        }

        log::info!(
            "Generated {}x{} floor: {} items, {} NPCs",
            width,
            height,
            floor.item_count(),
            floor.npcs().len()
        );
        floor
    }

    /// Draw `[factor, 2 * factor)` random cells, `factor` being a quarter of
    /// the floor's area, and put an enemy on each one outside the boss room.
    /// Several enemies may share a cell. Returns the number of draws that hit
    /// the boss room.
    fn scatter_enemies(&self, floor: &mut Floor, rng: &mut impl Rng) -> usize {
        let (width, height) = (floor.width(), floor.height());
        let boss_cell = floor.boss_cell();
        let enemy_factor = width * height / 4;
        let enemy_count = roll_count(enemy_factor, enemy_factor * 2, rng);

        let mut skipped = 0;
        for _ in 0..enemy_count {
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);
            if (x, y) == boss_cell {
                skipped += 1;
                continue;
            }
            if let Some(enemy) = self.generate_enemy(x, y, rng) {
                floor.add_npc(enemy);
            }
        }
        skipped
    }
}
