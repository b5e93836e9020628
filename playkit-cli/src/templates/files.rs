//! Template file contents

/// HTML entry document
pub const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
    <head>
        <meta charset="UTF-8" />
        <meta name="viewport" content="width=device-width, initial-scale=1.0" />
        <link rel="manifest" href="/manifest.json" />
        <title>{{html_text title}}</title>
        <style>
            html,
            body {
                margin: 0;
                padding: 0;
                overflow: hidden;
                background: #141414;
            }
            canvas {
                display: block;
            }
        </style>
    </head>
    <body>
        <canvas id="game"></canvas>
        <script type="module" src="/src/main.ts"></script>
    </body>
</html>
"##;

/// Entry module; registers every scene under `src/scenes` by file name
pub const MAIN_TS: &str = r##"import { createGame } from "playkit";
import { BACKGROUND, GAME_HEIGHT, GAME_WIDTH } from "./constants";

const game = createGame({
    canvas: document.querySelector<HTMLCanvasElement>("#game")!,
    width: GAME_WIDTH,
    height: GAME_HEIGHT,
    background: BACKGROUND,
    letterbox: true,
});

const scenes = import.meta.glob<{ default: (game: typeof game) => void }>("./scenes/*.ts", {
    eager: true,
});

for (const [path, module] of Object.entries(scenes)) {
    const name = path.slice("./scenes/".length, -".ts".length);
    game.scene(name, () => module.default(game));
}

game.go("main");
"##;

/// Constants module
pub const CONSTANTS_TS: &str = r##"export const GAME_TITLE = {{js_string title}};
export const GAME_WIDTH = 640;
export const GAME_HEIGHT = 360;
export const BACKGROUND: [number, number, number] = [20, 20, 20];
export const SPEED = 240;
"##;

/// Build tool configuration
pub const VITE_CONFIG_TS: &str = r##"import { defineConfig } from "vite";

export default defineConfig({
    base: "./",
    publicDir: "public",
    server: {
        port: 8000,
    },
    build: {
        outDir: "dist",
        assetsInlineLimit: 0,
    },
});
"##;

/// Ignore file for the generated repository
pub const GITIGNORE: &str = r"node_modules/
dist/
*.local
.DS_Store
.vscode/
.idea/
*.log
";

/// Main scene of the `empty` template
pub const EMPTY_MAIN_SCENE: &str = r##"import type { Game } from "playkit";

export default function main(game: Game) {
    game.add([
        game.text({{js_string title}}),
        game.pos(game.center()),
        game.anchor("center"),
    ]);
}
"##;

/// Main (title) scene of the `basic` template
pub const BASIC_MAIN_SCENE: &str = r##"import type { Game } from "playkit";
import { GAME_TITLE } from "../constants";

export default function main(game: Game) {
    game.add([game.text(GAME_TITLE, { size: 48 }), game.pos(game.center()), game.anchor("center")]);
    game.add([
        game.text("press space to start", { size: 16 }),
        game.pos(game.center().add(0, 64)),
        game.anchor("center"),
    ]);

    game.onKeyPress("space", () => game.go("game"));
}
"##;

/// Gameplay scene of the `basic` template
pub const BASIC_GAME_SCENE: &str = r##"import type { Game } from "playkit";
import enemy from "../objects/enemy";
import player from "../objects/player";

export default function gameScene(game: Game) {
    const hero = player(game, 80, game.height() / 2);

    game.loop(1.5, () => {
        enemy(game, game.width(), game.rand(32, game.height() - 32));
    });

    hero.onCollide("enemy", () => game.go("gameover"));
}
"##;

/// Game over scene of the `basic` template
pub const BASIC_GAMEOVER_SCENE: &str = r##"import type { Game } from "playkit";

export default function gameover(game: Game) {
    game.add([
        game.text("game over", { size: 48 }),
        game.pos(game.center()),
        game.anchor("center"),
    ]);

    game.onKeyPress("space", () => game.go("game"));
    game.onKeyPress("escape", () => game.go("main"));
}
"##;

/// Player object of the `basic` template
pub const BASIC_PLAYER: &str = r##"import type { Game, GameObj } from "playkit";
import { SPEED } from "../constants";

export default function player(game: Game, x: number, y: number): GameObj {
    const obj = game.add([
        game.rect(32, 32),
        game.pos(x, y),
        game.area(),
        game.color(80, 200, 120),
        "player",
    ]);

    game.onKeyDown("up", () => obj.move(0, -SPEED));
    game.onKeyDown("down", () => obj.move(0, SPEED));

    return obj;
}
"##;

/// Enemy object of the `basic` template
pub const BASIC_ENEMY: &str = r##"import type { Game, GameObj } from "playkit";
import { SPEED } from "../constants";

export default function enemy(game: Game, x: number, y: number): GameObj {
    return game.add([
        game.rect(24, 24),
        game.pos(x, y),
        game.area(),
        game.color(220, 80, 80),
        game.move(game.LEFT, SPEED),
        game.offscreen({ destroy: true }),
        "enemy",
    ]);
}
"##;
