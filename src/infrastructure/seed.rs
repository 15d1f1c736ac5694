// src/infrastructure/seed.rs
//! Sample corpus served by the demo data source.
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    AuthorName, NewPost, PostCategory, PostContent, PostSlug, PostTags, PostTitle,
};
use chrono::{DateTime, TimeZone, Utc};

struct SeedPost {
    title: &'static str,
    slug: &'static str,
    excerpt: &'static str,
    content: &'static str,
    author_name: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    featured: bool,
    /// (year, month, day, hour, minute) in UTC.
    published_at: (i32, u32, u32, u32, u32),
}

const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        title: "Getting Started with Web Accessibility",
        slug: "getting-started-web-accessibility",
        excerpt: "Learn the fundamentals of web accessibility and why it's crucial for creating inclusive digital experiences for all users.",
        content: "<h2>Introduction to Web Accessibility</h2><p>Web accessibility is about making your website usable by everyone, including people with disabilities. This includes visual, auditory, physical, speech, cognitive, and neurological disabilities.</p><h3>Why Accessibility Matters</h3><p>Accessibility ensures that people with disabilities can perceive, understand, navigate, and interact with your website effectively. It's not just the right thing to do - it's often legally required and makes business sense.</p><h3>Getting Started</h3><p>Start by learning the Web Content Accessibility Guidelines (WCAG) 2.1. These guidelines provide a framework for making web content more accessible to people with disabilities.</p><p>Focus on the four main principles:</p><ul><li><strong>Perceivable</strong> - Information must be presentable in ways users can perceive</li><li><strong>Operable</strong> - Interface components must be operable</li><li><strong>Understandable</strong> - Information and UI operation must be understandable</li><li><strong>Robust</strong> - Content must be robust enough for interpretation by assistive technologies</li></ul>",
        author_name: "Sarah Johnson",
        category: "Accessibility",
        tags: &["accessibility", "web development", "inclusive design", "WCAG"],
        featured: true,
        published_at: (2024, 1, 15, 10, 0),
    },
    SeedPost {
        title: "ARIA Labels: A Complete Guide",
        slug: "aria-labels-complete-guide",
        excerpt: "Master the use of ARIA labels to improve screen reader compatibility and enhance the accessibility of your web applications.",
        content: "<h2>Understanding ARIA Labels</h2><p>ARIA (Accessible Rich Internet Applications) labels provide additional context to assistive technologies like screen readers. They help users understand the purpose and state of interactive elements.</p><h3>Common ARIA Labels</h3><p>The most commonly used ARIA labels include:</p><ul><li><strong>aria-label</strong> - Provides an accessible name for an element</li><li><strong>aria-labelledby</strong> - References other elements that describe the current element</li><li><strong>aria-describedby</strong> - References elements that provide additional description</li></ul><h3>Best Practices</h3><p>Always test your ARIA labels with actual screen readers. What makes sense visually might not work well for assistive technology users.</p><p>Remember that ARIA labels should supplement, not replace, semantic HTML elements.</p>",
        author_name: "Michael Chen",
        category: "Technical",
        tags: &["ARIA", "screen readers", "accessibility", "labels"],
        featured: true,
        published_at: (2024, 1, 12, 14, 30),
    },
    SeedPost {
        title: "Color Contrast in Design",
        slug: "color-contrast-design",
        excerpt: "Understanding color contrast ratios and how to ensure your designs meet accessibility standards for users with visual impairments.",
        content: "<h2>The Importance of Color Contrast</h2><p>Color contrast is crucial for readability. The Web Content Accessibility Guidelines (WCAG) specify minimum contrast ratios that must be met for text and background colors.</p><h3>WCAG Standards</h3><p>WCAG 2.1 requires:</p><ul><li><strong>Level AA</strong> - 4.5:1 contrast ratio for normal text, 3:1 for large text</li><li><strong>Level AAA</strong> - 7:1 contrast ratio for normal text, 4.5:1 for large text</li></ul><h3>Testing Tools</h3><p>Use tools like WebAIM's Color Contrast Checker or browser extensions to verify your color combinations meet accessibility standards.</p><h3>Beyond Compliance</h3><p>Good color contrast benefits everyone, not just users with visual impairments. It improves readability in bright sunlight, on older monitors, and for users with temporary vision issues.</p>",
        author_name: "Emily Rodriguez",
        category: "Design",
        tags: &["color", "contrast", "visual design", "WCAG", "testing"],
        featured: false,
        published_at: (2024, 1, 8, 9, 15),
    },
    SeedPost {
        title: "Keyboard Navigation Best Practices",
        slug: "keyboard-navigation-best-practices",
        excerpt: "Learn how to implement proper keyboard navigation patterns to ensure your website is accessible to users who cannot use a mouse.",
        content: "<h2>Keyboard Navigation Fundamentals</h2><p>Keyboard navigation is essential for users with motor disabilities and those who prefer keyboard shortcuts. Proper focus management and logical tab order are critical.</p><h3>Tab Order</h3><p>Ensure your tab order follows a logical sequence that matches the visual layout of your page. Use the tabindex attribute sparingly and preferably with semantic HTML elements.</p><h3>Focus Indicators</h3><p>Always provide visible focus indicators so users can see which element currently has keyboard focus. Never remove focus outlines without providing an alternative.</p><h3>Skip Links</h3><p>Provide skip links to help keyboard users navigate quickly to main content areas, bypassing repetitive navigation elements.</p>",
        author_name: "David Kim",
        category: "Development",
        tags: &["keyboard", "navigation", "focus management", "usability"],
        featured: false,
        published_at: (2024, 1, 5, 16, 45),
    },
    SeedPost {
        title: "Screen Reader Testing Guide",
        slug: "screen-reader-testing-guide",
        excerpt: "A comprehensive guide to testing your websites with popular screen readers like NVDA, JAWS, and VoiceOver.",
        content: "<h2>Why Test with Screen Readers?</h2><p>Testing with screen readers is crucial for understanding how blind and visually impaired users experience your website. This guide covers the most popular screen readers and testing techniques.</p><h3>Popular Screen Readers</h3><ul><li><strong>NVDA</strong> - Free and open-source, popular on Windows</li><li><strong>JAWS</strong> - Commercial screen reader, widely used in professional settings</li><li><strong>VoiceOver</strong> - Built into macOS and iOS</li><li><strong>TalkBack</strong> - Android's built-in screen reader</li></ul><h3>Testing Strategies</h3><p>Start by navigating your site with your eyes closed, using only the keyboard and screen reader. Pay attention to how information is announced and whether the navigation makes sense.</p>",
        author_name: "Lisa Thompson",
        category: "Testing",
        tags: &["screen readers", "testing", "NVDA", "JAWS", "VoiceOver"],
        featured: false,
        published_at: (2024, 1, 2, 11, 20),
    },
    SeedPost {
        title: "Accessible Form Design",
        slug: "accessible-form-design",
        excerpt: "Design forms that are usable by everyone with proper labeling, error handling, and validation techniques.",
        content: "<h2>Forms and Accessibility</h2><p>Forms are critical interaction points on websites. Accessible forms must have proper labels, clear error messages, and logical grouping to be usable by assistive technologies.</p><h3>Essential Elements</h3><ul><li><strong>Labels</strong> - Every form control needs a proper label</li><li><strong>Fieldsets</strong> - Group related form controls logically</li><li><strong>Error Messages</strong> - Provide clear, helpful error messages</li><li><strong>Instructions</strong> - Give users clear guidance on how to complete forms</li></ul><h3>Validation</h3><p>Implement both client-side and server-side validation. Ensure error messages are associated with the relevant form controls using ARIA attributes.</p>",
        author_name: "James Wilson",
        category: "UX Design",
        tags: &["forms", "labels", "validation", "user experience"],
        featured: false,
        published_at: (2023, 12, 28, 13, 10),
    },
];

fn seed_time(
    (year, month, day, hour, minute): (i32, u32, u32, u32, u32),
) -> DomainResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .ok_or_else(|| DomainError::validation("invalid seed timestamp"))
}

impl SeedPost {
    fn to_new_post(&self) -> DomainResult<NewPost> {
        let published_at = seed_time(self.published_at)?;
        Ok(NewPost {
            title: PostTitle::new(self.title)?,
            slug: PostSlug::new(self.slug)?,
            content: PostContent::new(self.content)?,
            excerpt: self.excerpt.to_string(),
            author_name: AuthorName::new(self.author_name)?,
            tags: PostTags::new(self.tags.iter().copied())?,
            category: PostCategory::parse(Some(self.category.to_string()))?,
            featured: self.featured,
            published: true,
            published_at: Some(published_at),
            created_at: published_at,
            updated_at: published_at,
        })
    }
}

/// The six published accessibility articles, newest first.
pub fn sample_posts() -> DomainResult<Vec<NewPost>> {
    SEED_POSTS.iter().map(SeedPost::to_new_post).collect()
}
