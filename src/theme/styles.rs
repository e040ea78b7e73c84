//! Global CSS styles for the Chakshu.AI landing page.
//!
//! Night sky over a looping Earth video: white glow, ice-blue accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SKY */
  --sky-black: #000000;
  --overlay-top: rgba(0, 0, 0, 0.4);
  --overlay-bottom: rgba(0, 0, 0, 0.7);

  /* ICE BLUE (Quotes, Links, Idle Nav) */
  --ice: #aad4ff;

  /* GLOW */
  --white: #ffffff;
  --glow-soft: rgba(255, 255, 255, 0.4);
  --glow-medium: rgba(255, 255, 255, 0.5);
  --glow-strong: rgba(255, 255, 255, 0.9);
  --panel: rgba(255, 255, 255, 0.07);
  --panel-faint: rgba(255, 255, 255, 0.05);

  /* Typography */
  --font-sans: Arial, sans-serif;
  --font-mono: Consolas, 'Courier New', monospace;

  /* Transitions */
  --transition-fast: 0.3s ease;
  --transition-reveal: 0.7s;
}

/* === Global Reset === */
html {
  scroll-behavior: smooth;
}

body {
  margin: 0;
  background: var(--sky-black);
  color: var(--white);
  font-family: var(--font-sans);
}

ul {
  margin: 0;
  padding: 0;
}

a {
  color: var(--ice);
  text-decoration: none;
  transition: color var(--transition-fast);
}

a:hover {
  color: var(--white);
  text-decoration: underline;
}

/* === Page Frame === */
.landing {
  position: relative;
  min-height: 100vh;
  overflow-x: hidden;
}

.bg-video {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  z-index: -2;
}

.bg-overlay {
  position: fixed;
  inset: 0;
  background: linear-gradient(to bottom, var(--overlay-top), var(--overlay-bottom));
  z-index: -1;
}

/* === Star Field === */
.star-field {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  pointer-events: none;
  overflow: hidden;
  z-index: 0;
}

.star {
  position: absolute;
  top: -5px;
  background-color: var(--white);
  border-radius: 50%;
  opacity: 0.8;
  animation-name: fallDown;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
  filter: drop-shadow(0 0 2px white);
}

@keyframes fallDown {
  0% {
    transform: translateY(-10px);
    opacity: 0.8;
  }
  100% {
    transform: translateY(110vh);
    opacity: 0;
  }
}

/* === Navigation === */
.nav-bar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 20px 40px;
  position: relative;
  z-index: 2;
}

.brand {
  font-size: 1.8em;
  letter-spacing: 1px;
  cursor: default;
}

.nav-links {
  display: flex;
  flex-direction: row;
  align-items: center;
  gap: 32px;
  list-style: none;
  cursor: pointer;
}

.nav-link {
  position: relative;
  display: inline-block;
  vertical-align: middle;
  min-width: 60px;
  padding: 2px 0;
  text-align: center;
  color: var(--ice);
  opacity: 0.7;
  transition: color 0.3s, opacity 0.3s, transform 0.3s, font-size 0.3s;
}

.nav-link .nav-underline {
  position: absolute;
  left: 0;
  bottom: -4px;
  height: 2px;
  width: 0%;
  background: var(--white);
  border-radius: 2px;
  transition: width 0.3s;
}

.nav-link.active {
  color: var(--white);
  font-weight: bold;
  opacity: 1;
}

.nav-link.active,
.nav-link:hover {
  font-size: 1.18em;
  transform: scale(1.12);
}

.nav-link:hover {
  color: var(--white);
}

.nav-link.active .nav-underline,
.nav-link:hover .nav-underline {
  width: 100%;
}

/* === Section Reveal === */
.section {
  position: relative;
  z-index: 2;
  opacity: 0;
  transform: translateY(40px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.section.visible {
  opacity: 1;
  transform: translateY(0);
}

/* === Hero === */
#main-section {
  text-align: center;
  margin-top: 80px;
}

.hero-title {
  font-size: 4em;
  margin: 0;
  text-shadow: 0 0 20px var(--glow-medium);
  transition: 0.4s;
}

.hero-title:hover {
  text-shadow: 0 0 30px var(--glow-strong);
}

.hero-tagline {
  margin-top: 10px;
  font-size: 1.5em;
  opacity: 0.8;
}

#main-section-content {
  text-align: center;
  padding: 60px 20px;
}

.hero-blurb {
  max-width: 700px;
  margin: 0 auto;
  line-height: 1.7;
  font-size: 1.2em;
  opacity: 0.9;
}

.cta {
  margin-top: 40px;
}

/* === Buttons === */
.btn-launch {
  background-color: var(--white);
  color: black;
  border: none;
  border-radius: 25px;
  padding: 15px 40px;
  font-size: 1.3em;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast),
    background-color var(--transition-fast);
}

.btn-launch:hover {
  background-color: #dddddd;
  box-shadow: 0 0 15px white;
  transform: scale(1.05);
}

.icon-btn {
  border: none;
  cursor: pointer;
  outline: none;
}

.scroll-top-btn {
  position: fixed;
  bottom: 32px;
  right: 32px;
  z-index: 100;
  width: 48px;
  height: 48px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.85);
  color: #222222;
  font-size: 2em;
  box-shadow: 0 2px 12px rgba(0, 0, 0, 0.18);
  transition: background 0.3s, transform 0.3s;
}

.scroll-top-arrow {
  display: block;
  transform: translateY(2px);
}

/* === Typewriter === */
.typewriter {
  margin-top: 48px;
  min-height: 48px;
  font-size: 1.25em;
  color: var(--ice);
  font-family: var(--font-mono);
  text-align: center;
  letter-spacing: 0.5px;
  font-weight: 500;
  position: relative;
  transition: color 0.5s;
  user-select: none;
}

.typewriter-text {
  display: inline-block;
}

.typewriter-cursor {
  display: inline-block;
  width: 1ch;
  color: var(--white);
  font-weight: bold;
  animation: blink-cursor 1.1s steps(1) infinite;
}

@keyframes blink-cursor {
  0% { opacity: 1; }
  49% { opacity: 1; }
  50% { opacity: 0; }
  99% { opacity: 0; }
  100% { opacity: 1; }
}

/* === Mission === */
.section-header {
  font-size: 2em;
  letter-spacing: 1px;
  text-shadow: 0 0 10px var(--glow-soft);
  text-align: center;
  margin-bottom: 20px;
}

.mission-section {
  background-color: var(--panel);
  margin-top: 150px;
  padding: 40px 20px;
}

.mission-subtitle {
  max-width: 700px;
  margin: 0 auto;
  line-height: 1.7;
  font-size: 1.1em;
  opacity: 0.9;
  text-align: center;
}

.mission-text {
  max-width: 700px;
  margin: 1em auto 0;
  line-height: 1.7;
  font-size: 1.1em;
  opacity: 0.9;
  text-align: justify;
}

.mission-goals {
  max-width: 700px;
  margin: 1em auto 0;
  padding-left: 1.5em;
  line-height: 1.7;
  font-size: 1.1em;
  opacity: 0.9;
}

/* === Developers === */
.about-section {
  position: relative;
  z-index: 2;
  background-color: var(--panel-faint);
  margin-top: 150px;
  padding: 40px 20px;
  text-align: center;
}

.about-section .section-header {
  margin-bottom: 30px;
}

.developer-links {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 25px;
  font-size: 1.1em;
  opacity: 0.9;
}

.developer-link {
  display: inline-block;
  cursor: pointer;
  padding: 6px 12px;
  border-radius: 20px;
  border: 1px solid rgba(255, 255, 255, 0.3);
  box-shadow: 0 0 10px rgba(255, 255, 255, 0.2);
  transition: all var(--transition-fast);
  color: inherit;
}

/* === Footer === */
.landing-footer {
  position: relative;
  z-index: 2;
  width: 100%;
  text-align: center;
  padding: 20px;
  opacity: 0.7;
  font-size: 0.9em;
  box-sizing: border-box;
}
"#;
