/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

pub mod Badge;
pub mod CTAButton;
pub mod ConfigError;
pub mod DarkModeToggle;
pub mod FeatureList;
pub mod Footer;
pub mod HeroHeader;
pub mod LineChart;
pub mod LogoCloud;
pub mod Page;

// Section components
pub mod sections {
    pub mod Faq;
    pub mod Features;
    pub mod HowItWorks;
    pub mod Newsletter;
    pub mod Pricing;
    pub mod Testimonials;
}

pub use Badge::*;
pub use CTAButton::*;
pub use ConfigError::*;
pub use DarkModeToggle::*;
pub use Footer::*;
pub use HeroHeader::*;
pub use Page::*;
