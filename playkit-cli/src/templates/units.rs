//! Stubs written by `playkit add`
//!
//! Rendered against `{ name, identifier }` where `identifier` is the camel-cased
//! form of `name`. `name` only ever appears through `js_string`.

/// Scene stub
pub const SCENE_UNIT: &str = r##"import type { Game } from "playkit";

export default function {{identifier}}(game: Game) {
    game.add([game.text({{js_string name}}), game.pos(24, 24)]);
}
"##;

/// Game object stub
pub const OBJECT_UNIT: &str = r##"import type { Game, GameObj } from "playkit";

export default function {{identifier}}(game: Game, x: number, y: number): GameObj {
    return game.add([game.rect(32, 32), game.pos(x, y), game.area(), {{js_string name}}]);
}
"##;

/// Component stub
pub const COMPONENT_UNIT: &str = r##"import type { Comp } from "playkit";

export default function {{identifier}}(): Comp {
    return {
        id: {{js_string name}},
        update() {},
    };
}
"##;
