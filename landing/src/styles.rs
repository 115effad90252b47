//! Global stylesheet for the landing page.
//!
//! Injected once by the document shell. Ambient motion (clouds, islands,
//! particles, rings, the floating icon) is pure CSS keyframes driven by
//! per-instance custom properties set from [`crate::decor`]:
//!
//! - `--duration`, `--delay` - timing for every decoration
//! - `--scale`, `--rise`, `--tilt` - island bobbing
//! - `--x0`, `--x1` - particle horizontal drift
//!
//! Pointer parallax is not here: those transforms are written inline each
//! animation frame.

/// Complete CSS for the page - sky blue and gold, Inter typography.
pub const LANDING_CSS: &str = r#"
:root {
    --gold-light: #facc15;
    --gold: #f59e0b;
    --gold-soft: rgba(252, 211, 77, 0.7);
    --ink: #374151;
    --white-90: rgba(255, 255, 255, 0.9);
    --white-80: rgba(255, 255, 255, 0.8);
    --white-50: rgba(255, 255, 255, 0.5);
    --white-30: rgba(255, 255, 255, 0.3);
    --white-10: rgba(255, 255, 255, 0.1);
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
    --content-max: 80rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    margin: 0;
    min-height: 100vh;
    background: #7dd3fc;
}

/* Layout */
.landing {
    min-height: 100vh;
    width: 100%;
    overflow: hidden;
    position: relative;
}

.layer {
    position: absolute;
    inset: 0;
}

.sky {
    z-index: 0;
    will-change: transform;
}

.sky img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

/* Clouds */
.clouds {
    z-index: 5;
    overflow: hidden;
}

.cloud {
    position: absolute;
    left: -20%;
    border-radius: 9999px;
    background: var(--white-30);
    filter: blur(64px);
    animation: cloud-drift var(--duration) linear var(--delay) infinite;
}

@keyframes cloud-drift {
    from { left: -20%; }
    to { left: 120%; }
}

/* Floating islands */
.islands {
    z-index: 10;
    pointer-events: none;
}

.island {
    position: absolute;
    transform: scale(var(--scale));
    animation: island-bob var(--duration) ease-in-out infinite alternate;
}

@keyframes island-bob {
    0% { transform: translateY(0) rotate(0deg) scale(var(--scale)); }
    50% { transform: translateY(var(--rise)) rotate(var(--tilt)) scale(var(--scale)); }
    100% { transform: translateY(0) rotate(0deg) scale(var(--scale)); }
}

/* Pulse rings */
.rings {
    z-index: 15;
    pointer-events: none;
}

.ring {
    position: absolute;
    border-radius: 9999px;
    border: 2px solid var(--white-10);
    transform: scale(0);
    opacity: 0;
    animation: ring-pulse var(--duration) ease-out var(--delay) infinite;
}

@keyframes ring-pulse {
    0% { transform: scale(0); opacity: 0; }
    50% { opacity: 0.5; }
    100% { transform: scale(1.5); opacity: 0; }
}

/* Gold particles */
.particles {
    z-index: 20;
    pointer-events: none;
}

.particle {
    position: absolute;
    top: 0;
    left: 0;
    border-radius: 9999px;
    background: var(--gold-soft);
    animation: particle-fall var(--duration) linear infinite;
}

@keyframes particle-fall {
    from { transform: translate(var(--x0), -10vh); }
    to { transform: translate(var(--x1), 110vh); }
}

/* Content */
.content {
    position: relative;
    z-index: 30;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 2rem;
    min-height: 100vh;
    max-width: var(--content-max);
    margin: 0 auto;
    padding: 3rem 2rem;
}

.hero-column,
.info-column {
    width: 100%;
}

.hero-column {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    animation: slide-in-left 0.8s ease-out both;
}

.info-column {
    text-align: center;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    animation: slide-in-right 0.8s ease-out 0.2s both;
}

@media (min-width: 1024px) {
    .content {
        flex-direction: row;
        padding: 3rem 4rem;
    }
    .hero-column,
    .info-column {
        width: 50%;
    }
    .hero-column {
        align-items: flex-start;
    }
    .info-column {
        text-align: left;
    }
}

/* Hero icon */
.hero-parallax {
    will-change: transform;
}

.hero-float {
    position: relative;
    animation: hero-float 3s ease-in-out infinite alternate;
}

.hero-rock {
    position: relative;
    animation: hero-rock 5s ease-in-out infinite;
}

.hero-icon {
    display: block;
    max-width: 100%;
    height: auto;
    filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
}

.hero-glow {
    position: absolute;
    inset: -1rem;
    z-index: -1;
    border-radius: 9999px;
    background: rgba(251, 191, 36, 0.2);
    filter: blur(24px);
    animation: glow-pulse 3s ease-in-out infinite alternate;
}

@keyframes hero-float {
    0% { transform: translateY(0); }
    50% { transform: translateY(-8px); }
    100% { transform: translateY(0); }
}

@keyframes hero-rock {
    0%, 50%, 100% { transform: rotate(0deg); }
    25% { transform: rotate(1deg); }
    75% { transform: rotate(-1deg); }
}

@keyframes glow-pulse {
    0% { transform: scale(1); opacity: 0.3; }
    50% { transform: scale(1.2); opacity: 0.6; }
    100% { transform: scale(1); opacity: 0.3; }
}

/* Subtitle */
.subtitle-wrap {
    position: relative;
}

.subtitle {
    display: inline-block;
    margin: 0;
    font-size: 1.25rem;
    font-weight: 500;
    color: var(--white-90);
    animation: fade-up 0.5s ease-out 0.5s both;
}

.subtitle-underline {
    height: 0.25rem;
    margin-top: 0.25rem;
    border-radius: 9999px;
    background: linear-gradient(to right, var(--gold-light), var(--gold));
    animation: grow-width 0.8s ease-out 0.7s both;
}

/* Description card */
.card {
    padding: 2rem;
    border-radius: 1rem;
    background: var(--white-80);
    backdrop-filter: blur(12px);
    border: 1px solid var(--white-50);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1);
    transition: transform 0.2s ease, box-shadow 0.2s ease;
    /* backwards only: a held end frame would pin transform and kill :hover */
    animation: fade-up 0.5s ease-out 0.6s backwards;
}

.card:hover {
    transform: translateY(-5px);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
}

.card-intro {
    margin: 0 0 1.5rem;
    font-size: 1.125rem;
    line-height: 1.625;
    color: var(--ink);
}

.features {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    margin: 0 0 2rem;
    padding: 0;
    list-style: none;
}

.feature {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    text-align: left;
    color: var(--ink);
    animation: slide-in-feature 0.4s ease-out both;
}

.feature-check {
    flex-shrink: 0;
    margin-top: 0.25rem;
    color: var(--gold);
}

.feature-text {
    margin: 0;
}

/* Download */
.download {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    animation: fade-up 0.5s ease-out 1.1s both;
}

.cta {
    position: relative;
    display: inline-block;
    width: 100%;
    text-decoration: none;
}

.cta-glow {
    position: absolute;
    inset: 0;
    border-radius: 0.75rem;
    background: linear-gradient(to right, var(--gold-light), var(--gold));
    filter: blur(12px);
    transform: scale(1);
    transition: transform 0.2s ease;
}

.cta-glow.hovering {
    transform: scale(1.03);
}

.cta-button {
    position: relative;
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
    padding: 1rem 2rem;
    border: 0;
    border-radius: 0.75rem;
    background: linear-gradient(to right, var(--gold-light), var(--gold));
    color: #fff;
    font: inherit;
    font-weight: 700;
    cursor: pointer;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    transition: transform 0.15s ease;
}

.cta-button:hover {
    transform: scale(1.03);
}

.cta-button:active {
    transform: scale(0.98);
}

.cta-icon.bouncing {
    animation: bounce 1s infinite;
}

.install-hint {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    font-size: 0.875rem;
    color: var(--white-80);
    animation: fade-in 0.5s ease-out 1.3s both;
}

/* Entrances */
@keyframes slide-in-left {
    from { transform: translateX(-50px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slide-in-right {
    from { transform: translateX(50px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slide-in-feature {
    from { transform: translateX(-20px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes fade-up {
    from { transform: translateY(20px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}

@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes grow-width {
    from { width: 0; }
    to { width: 100%; }
}

@keyframes bounce {
    0%, 100% {
        transform: translateY(-25%);
        animation-timing-function: cubic-bezier(0.8, 0, 1, 1);
    }
    50% {
        transform: none;
        animation-timing-function: cubic-bezier(0, 0, 0.2, 1);
    }
}

@media (prefers-reduced-motion: reduce) {
    .cloud, .island, .ring, .particle,
    .hero-float, .hero-rock, .hero-glow,
    .cta-icon.bouncing {
        animation: none;
    }
}
"#;
