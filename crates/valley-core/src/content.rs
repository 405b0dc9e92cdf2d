// Builtin scene content for the site.
//
// Positions are tuned against the 16:9 background art; mobile rects are
// nudged inwards because the background is cropped on narrow screens.

use crate::scene::{
    AssetRef, Effect, HotspotDefinition, HotspotRect, ModalContent, Scene, SceneName,
};

fn hotspot(
    id: &str,
    label: &str,
    description: &str,
    desktop: HotspotRect,
    mobile: HotspotRect,
    color: &str,
    effect: Effect,
) -> HotspotDefinition {
    HotspotDefinition {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        desktop_rect: desktop,
        mobile_rect: mobile,
        color: color.to_string(),
        effect,
    }
}

fn navigate(path: &str) -> Effect {
    Effect::Navigate {
        path: path.to_string(),
    }
}

fn switch(target: SceneName) -> Effect {
    Effect::SwitchScene { target }
}

fn modal(title: &str, body: &str) -> Effect {
    Effect::OpenModal {
        content: ModalContent {
            title: title.to_string(),
            body: body.to_string(),
        },
    }
}

fn action(name: &str, description: &str) -> Effect {
    Effect::DispatchAction {
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn scene(name: SceneName, title: &str, hotspots: Vec<HotspotDefinition>) -> Scene {
    Scene {
        name,
        title: title.to_string(),
        background: AssetRef::new(format!("/scenes/{}.webp", name.as_str())),
        hotspots,
    }
}

pub fn scenes() -> Vec<Scene> {
    vec![valley(), stackhouse(), saloon(), devzen(), river(), neonpod()]
}

fn valley() -> Scene {
    scene(
        SceneName::Valley,
        "The Valley",
        vec![
            hotspot(
                "stackhouse-tower",
                "The Stackhouse",
                "Our engineering tower. Service packages and the build floor live here.",
                HotspotRect::new(30.0, 20.0, 120, 160),
                HotspotRect::new(28.0, 12.0, 88, 110),
                "#f59e0b",
                switch(SceneName::Stackhouse),
            ),
            hotspot(
                "saloon",
                "The Saloon",
                "Pull up a stool and tell us about your project.",
                HotspotRect::new(55.0, 72.0, 140, 110),
                HotspotRect::new(52.0, 66.0, 96, 80),
                "#ef4444",
                switch(SceneName::Saloon),
            ),
            hotspot(
                "devzen-temple",
                "DevZen Temple",
                "Quiet, focused consulting for teams that need to slow down to speed up.",
                HotspotRect::new(15.0, 48.0, 110, 120),
                HotspotRect::new(14.0, 45.0, 80, 90),
                "#10b981",
                switch(SceneName::Devzen),
            ),
            hotspot(
                "river-dock",
                "The River",
                "Follow the water downstream to our story.",
                HotspotRect::new(80.0, 40.0, 160, 70),
                HotspotRect::new(82.0, 38.0, 110, 56),
                "#3b82f6",
                switch(SceneName::River),
            ),
            hotspot(
                "neonpod",
                "Neon Pod",
                "Experiments, toys and lab demos glowing after dark.",
                HotspotRect::new(40.0, 85.0, 100, 100),
                HotspotRect::new(36.0, 80.0, 72, 72),
                "#d946ef",
                switch(SceneName::Neonpod),
            ),
            hotspot(
                "members-gate",
                "Members Gate",
                "Members only. Bring your secret handshake.",
                HotspotRect::new(70.0, 8.0, 90, 130),
                HotspotRect::new(68.0, 6.0, 64, 92),
                "#94a3b8",
                navigate("/members"),
            ),
        ],
    )
}

fn stackhouse() -> Scene {
    scene(
        SceneName::Stackhouse,
        "The Stackhouse",
        vec![
            hotspot(
                "services-board",
                "Service Packages",
                "Fixed-scope packages from quick audits to full builds.",
                HotspotRect::new(35.0, 50.0, 150, 110),
                HotspotRect::new(32.0, 48.0, 100, 76),
                "#f59e0b",
                navigate("/services"),
            ),
            hotspot(
                "build-lab",
                "Build Lab",
                "Prototypes and demos from the workbench.",
                HotspotRect::new(60.0, 15.0, 130, 120),
                HotspotRect::new(58.0, 10.0, 90, 84),
                "#22d3ee",
                navigate("/lab"),
            ),
            hotspot(
                "blueprint-table",
                "Blueprint Table",
                "How a project moves from sketch to ship.",
                HotspotRect::new(78.0, 62.0, 140, 80),
                HotspotRect::new(80.0, 55.0, 96, 60),
                "#60a5fa",
                modal(
                    "Blueprints",
                    "Discovery, a fixed-scope plan, weekly demos, then handover with docs and a support window.",
                ),
            ),
            hotspot(
                "server-rack",
                "Server Rack",
                "Live uptime for client projects",
                HotspotRect::new(20.0, 82.0, 80, 150),
                HotspotRect::new(18.0, 78.0, 60, 110),
                "#a3e635",
                action("Status Dashboard", "Live uptime for client projects"),
            ),
            hotspot(
                "valley-trail",
                "Back to the Valley",
                "Take the trail back down.",
                HotspotRect::new(88.0, 5.0, 90, 60),
                HotspotRect::new(88.0, 4.0, 70, 48),
                "#94a3b8",
                switch(SceneName::Valley),
            ),
        ],
    )
}

fn saloon() -> Scene {
    scene(
        SceneName::Saloon,
        "The Saloon",
        vec![
            hotspot(
                "contact-bar",
                "The Bar",
                "Order a conversation. We reply within a day.",
                HotspotRect::new(50.0, 45.0, 180, 90),
                HotspotRect::new(48.0, 40.0, 120, 64),
                "#ef4444",
                navigate("/contact"),
            ),
            hotspot(
                "invoice-desk",
                "Invoice Desk",
                "Settle up or request a quote.",
                HotspotRect::new(45.0, 78.0, 110, 100),
                HotspotRect::new(44.0, 72.0, 76, 70),
                "#f97316",
                navigate("/invoice"),
            ),
            hotspot(
                "jukebox",
                "Jukebox",
                "Pick the soundtrack for your visit",
                HotspotRect::new(62.0, 12.0, 80, 130),
                HotspotRect::new(60.0, 8.0, 60, 96),
                "#eab308",
                action("Jukebox", "Pick the soundtrack for your visit"),
            ),
            hotspot(
                "wanted-poster",
                "Wanted Poster",
                "We are always looking for good people.",
                HotspotRect::new(12.0, 30.0, 70, 90),
                HotspotRect::new(10.0, 26.0, 56, 72),
                "#d97706",
                modal(
                    "Wanted",
                    "Freelance engineers and designers who like small teams and clear scopes. Say hello at the bar.",
                ),
            ),
        ],
    )
}

fn devzen() -> Scene {
    scene(
        SceneName::Devzen,
        "DevZen Temple",
        vec![
            hotspot(
                "meditation-stone",
                "Meditation Stone",
                "Our principles, carved in stone.",
                HotspotRect::new(65.0, 50.0, 120, 80),
                HotspotRect::new(64.0, 46.0, 84, 60),
                "#10b981",
                modal(
                    "Principles",
                    "Small scopes. Honest estimates. Boring technology where it counts.",
                ),
            ),
            hotspot(
                "lab-scrolls",
                "Lab Scrolls",
                "Write-ups from the lab.",
                HotspotRect::new(30.0, 18.0, 90, 110),
                HotspotRect::new(28.0, 14.0, 64, 80),
                "#34d399",
                navigate("/lab"),
            ),
            hotspot(
                "tea-house",
                "Tea House",
                "Book a calm hour with an engineer",
                HotspotRect::new(22.0, 76.0, 130, 110),
                HotspotRect::new(20.0, 70.0, 90, 76),
                "#84cc16",
                action("Tea Ceremony", "Book a calm hour with an engineer"),
            ),
            hotspot(
                "river-path",
                "River Path",
                "A stone path down to the water.",
                HotspotRect::new(85.0, 35.0, 150, 60),
                HotspotRect::new(86.0, 30.0, 100, 48),
                "#3b82f6",
                switch(SceneName::River),
            ),
        ],
    )
}

fn river() -> Scene {
    scene(
        SceneName::River,
        "The River",
        vec![
            hotspot(
                "lighthouse",
                "Lighthouse",
                "Who we are and how we got here.",
                HotspotRect::new(18.0, 85.0, 70, 170),
                HotspotRect::new(16.0, 80.0, 52, 120),
                "#fbbf24",
                navigate("/about"),
            ),
            hotspot(
                "fishing-spot",
                "Fishing Spot",
                "Cast a line for open-source catches",
                HotspotRect::new(70.0, 22.0, 110, 70),
                HotspotRect::new(72.0, 16.0, 80, 56),
                "#0ea5e9",
                action("Open Source", "Cast a line for open-source catches"),
            ),
            hotspot(
                "message-bottle",
                "Message in a Bottle",
                "Something washed up on the bank.",
                HotspotRect::new(82.0, 58.0, 50, 60),
                HotspotRect::new(84.0, 52.0, 44, 52),
                "#67e8f9",
                modal(
                    "A note",
                    "Thanks for exploring. The best projects start with a question, so send us yours.",
                ),
            ),
            hotspot(
                "ferry",
                "Night Ferry",
                "Ride across to the Neon Pod.",
                HotspotRect::new(55.0, 48.0, 160, 80),
                HotspotRect::new(54.0, 44.0, 110, 60),
                "#d946ef",
                switch(SceneName::Neonpod),
            ),
        ],
    )
}

fn neonpod() -> Scene {
    scene(
        SceneName::Neonpod,
        "Neon Pod",
        vec![
            hotspot(
                "arcade",
                "Arcade",
                "Playable lab demos.",
                HotspotRect::new(48.0, 20.0, 130, 150),
                HotspotRect::new(46.0, 14.0, 90, 104),
                "#d946ef",
                navigate("/lab/arcade"),
            ),
            hotspot(
                "hologram",
                "Hologram",
                "A message from the future.",
                HotspotRect::new(28.0, 52.0, 90, 140),
                HotspotRect::new(26.0, 48.0, 64, 100),
                "#a78bfa",
                modal(
                    "Transmission",
                    "The pod is where ideas get tested before they become services.",
                ),
            ),
            hotspot(
                "synth-wall",
                "Synth Wall",
                "Play with the generative soundboard",
                HotspotRect::new(60.0, 80.0, 120, 120),
                HotspotRect::new(58.0, 74.0, 84, 84),
                "#f472b6",
                action("Synth Wall", "Play with the generative soundboard"),
            ),
            hotspot(
                "stackhouse-lift",
                "Lift to the Stackhouse",
                "Straight up to the engineering floors.",
                HotspotRect::new(86.0, 88.0, 80, 70),
                HotspotRect::new(86.0, 84.0, 60, 52),
                "#f59e0b",
                switch(SceneName::Stackhouse),
            ),
        ],
    )
}
