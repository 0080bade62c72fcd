//! GraphQL schema definition.
//!
//! The roots are thin: every resolver delegates to a domain edge function.

use chrono::NaiveDate;
use juniper::{EmptySubscription, FieldResult, RootNode};

use super::context::GraphQLContext;

// Domain edges
use crate::domains::contact::edges::{mutation as contact_mutation, query as contact_query};
use crate::domains::events::edges::{mutation as events_mutation, query as events_query};
use crate::domains::gallery::edges::{mutation as gallery_mutation, query as gallery_query};
use crate::domains::members::edges::{mutation as members_mutation, query as members_query};
use crate::domains::pages::edges::{mutation as pages_mutation, query as pages_query};
use crate::domains::updates::edges::{mutation as updates_mutation, query as updates_query};

// Domain data types (GraphQL types)
use crate::domains::contact::data::{
    ContactMessageConnection, ContactMessageData, ContactPageData, MessageSubjectData,
};
use crate::domains::events::data::{EventData, EventImageData};
use crate::domains::gallery::data::GalleryImageData;
use crate::domains::members::data::{MemberConnection, MemberData, SocietyDesignationData};
use crate::domains::pages::data::{
    AboutPageData, CanCreate, HomePageData, JoinPageData, PresidentMessageData,
};
use crate::domains::updates::data::UpdateData;

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Public site queries
    // =========================================================================

    /// Landing page content, if published
    async fn home_page(ctx: &GraphQLContext) -> FieldResult<Option<HomePageData>> {
        pages_query::home_page(ctx).await
    }

    /// About page content, if published
    async fn about_page(ctx: &GraphQLContext) -> FieldResult<Option<AboutPageData>> {
        pages_query::about_page(ctx).await
    }

    /// Membership page content, if published
    async fn join_page(ctx: &GraphQLContext) -> FieldResult<Option<JoinPageData>> {
        pages_query::join_page(ctx).await
    }

    /// President's message, if published
    async fn president_message(ctx: &GraphQLContext) -> FieldResult<Option<PresidentMessageData>> {
        pages_query::president_message(ctx).await
    }

    /// Footer contact details
    async fn contact_page(ctx: &GraphQLContext) -> FieldResult<Option<ContactPageData>> {
        contact_query::contact_page(ctx).await
    }

    /// Published events, newest first, galleries included
    async fn events(ctx: &GraphQLContext) -> FieldResult<Vec<EventData>> {
        events_query::events(ctx).await
    }

    /// A single event by id
    async fn event(ctx: &GraphQLContext, id: String) -> FieldResult<Option<EventData>> {
        events_query::event(ctx, id).await
    }

    /// The home page event strip (default 5 most recent published events)
    async fn latest_events(
        ctx: &GraphQLContext,
        limit: Option<i32>,
    ) -> FieldResult<Vec<EventData>> {
        events_query::latest_events(ctx, limit).await
    }

    /// Gallery strip for one event, in display order
    async fn event_images(
        ctx: &GraphQLContext,
        event_id: String,
    ) -> FieldResult<Vec<EventImageData>> {
        events_query::event_images(ctx, event_id).await
    }

    /// Public member roster
    async fn members(ctx: &GraphQLContext) -> FieldResult<Vec<MemberData>> {
        members_query::members(ctx).await
    }

    /// A single member by id
    async fn member(ctx: &GraphQLContext, id: String) -> FieldResult<Option<MemberData>> {
        members_query::member(ctx, id).await
    }

    /// Published gallery, newest upload first
    async fn gallery(ctx: &GraphQLContext) -> FieldResult<Vec<GalleryImageData>> {
        gallery_query::gallery(ctx).await
    }

    /// Published announcements, pinned-first then newest
    async fn updates(ctx: &GraphQLContext) -> FieldResult<Vec<UpdateData>> {
        updates_query::updates(ctx).await
    }

    // =========================================================================
    // Admin queries
    // =========================================================================

    /// Which singleton content slots are still unclaimed
    async fn can_create(ctx: &GraphQLContext) -> FieldResult<CanCreate> {
        pages_query::can_create(ctx).await
    }

    /// Admin listing of home pages (at most one, published or not)
    async fn all_home_pages(ctx: &GraphQLContext) -> FieldResult<Vec<HomePageData>> {
        pages_query::all_home_pages(ctx).await
    }

    /// Admin listing of about pages
    async fn all_about_pages(ctx: &GraphQLContext) -> FieldResult<Vec<AboutPageData>> {
        pages_query::all_about_pages(ctx).await
    }

    /// Admin listing of join pages
    async fn all_join_pages(ctx: &GraphQLContext) -> FieldResult<Vec<JoinPageData>> {
        pages_query::all_join_pages(ctx).await
    }

    /// Admin listing of president messages
    async fn all_president_messages(
        ctx: &GraphQLContext,
    ) -> FieldResult<Vec<PresidentMessageData>> {
        pages_query::all_president_messages(ctx).await
    }

    /// Admin listing of contact page rows
    async fn all_contact_pages(ctx: &GraphQLContext) -> FieldResult<Vec<ContactPageData>> {
        contact_query::all_contact_pages(ctx).await
    }

    /// Admin event listing with publication filter and text search
    async fn all_events(
        ctx: &GraphQLContext,
        active: Option<bool>,
        search: Option<String>,
    ) -> FieldResult<Vec<EventData>> {
        events_query::all_events(ctx, active, search).await
    }

    /// Admin member listing: applications and roster rows, newest first
    async fn all_members(
        ctx: &GraphQLContext,
        designation: Option<SocietyDesignationData>,
        active: Option<bool>,
        search: Option<String>,
        first: Option<i32>,
        after: Option<String>,
    ) -> FieldResult<MemberConnection> {
        members_query::all_members(ctx, designation, active, search, first, after).await
    }

    /// Admin gallery listing with publication filter and caption search
    async fn all_gallery_images(
        ctx: &GraphQLContext,
        active: Option<bool>,
        search: Option<String>,
    ) -> FieldResult<Vec<GalleryImageData>> {
        gallery_query::all_gallery_images(ctx, active, search).await
    }

    /// Admin announcement listing with publication filter and text search
    async fn all_updates(
        ctx: &GraphQLContext,
        active: Option<bool>,
        search: Option<String>,
    ) -> FieldResult<Vec<UpdateData>> {
        updates_query::all_updates(ctx, active, search).await
    }

    /// A single inbox message by id
    async fn contact_message(
        ctx: &GraphQLContext,
        id: String,
    ) -> FieldResult<Option<ContactMessageData>> {
        contact_query::contact_message(ctx, id).await
    }

    /// The admin inbox, filterable and keyset-paginated newest first
    async fn contact_messages(
        ctx: &GraphQLContext,
        resolved: Option<bool>,
        subject: Option<MessageSubjectData>,
        search: Option<String>,
        first: Option<i32>,
        after: Option<String>,
    ) -> FieldResult<ContactMessageConnection> {
        contact_query::contact_messages(ctx, resolved, subject, search, first, after).await
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Singleton content pages
    // =========================================================================

    /// Create the home page; fails if the slot is already claimed
    #[allow(clippy::too_many_arguments)]
    async fn create_home_page(
        ctx: &GraphQLContext,
        title: String,
        content: String,
        name: String,
        description: String,
        hero_title: String,
        hero_subtitle: String,
        featured_image: Option<String>,
        is_active: Option<bool>,
    ) -> FieldResult<HomePageData> {
        pages_mutation::create_home_page(
            ctx,
            title,
            content,
            name,
            description,
            hero_title,
            hero_subtitle,
            featured_image,
            is_active,
        )
        .await
    }

    /// Overwrite the home page
    #[allow(clippy::too_many_arguments)]
    async fn update_home_page(
        ctx: &GraphQLContext,
        id: String,
        title: String,
        content: String,
        name: String,
        description: String,
        hero_title: String,
        hero_subtitle: String,
        featured_image: Option<String>,
        is_active: bool,
    ) -> FieldResult<HomePageData> {
        pages_mutation::update_home_page(
            ctx,
            id,
            title,
            content,
            name,
            description,
            hero_title,
            hero_subtitle,
            featured_image,
            is_active,
        )
        .await
    }

    /// Delete the home page, freeing the slot
    async fn delete_home_page(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
        pages_mutation::delete_home_page(ctx, id).await
    }

    /// Create the about page; fails if the slot is already claimed
    async fn create_about_page(
        ctx: &GraphQLContext,
        title: String,
        content: String,
        mission: String,
        vision: String,
        team_image: Option<String>,
        is_active: Option<bool>,
    ) -> FieldResult<AboutPageData> {
        pages_mutation::create_about_page(ctx, title, content, mission, vision, team_image, is_active)
            .await
    }

    /// Overwrite the about page
    #[allow(clippy::too_many_arguments)]
    async fn update_about_page(
        ctx: &GraphQLContext,
        id: String,
        title: String,
        content: String,
        mission: String,
        vision: String,
        team_image: Option<String>,
        is_active: bool,
    ) -> FieldResult<AboutPageData> {
        pages_mutation::update_about_page(
            ctx, id, title, content, mission, vision, team_image, is_active,
        )
        .await
    }

    /// Delete the about page, freeing the slot
    async fn delete_about_page(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
        pages_mutation::delete_about_page(ctx, id).await
    }

    /// Create the join page; fails if the slot is already claimed
    async fn create_join_page(
        ctx: &GraphQLContext,
        title: String,
        content: String,
        benefits: String,
        requirements: String,
        application_form_embed: String,
        is_active: Option<bool>,
    ) -> FieldResult<JoinPageData> {
        pages_mutation::create_join_page(
            ctx,
            title,
            content,
            benefits,
            requirements,
            application_form_embed,
            is_active,
        )
        .await
    }

    /// Overwrite the join page
    #[allow(clippy::too_many_arguments)]
    async fn update_join_page(
        ctx: &GraphQLContext,
        id: String,
        title: String,
        content: String,
        benefits: String,
        requirements: String,
        application_form_embed: String,
        is_active: bool,
    ) -> FieldResult<JoinPageData> {
        pages_mutation::update_join_page(
            ctx,
            id,
            title,
            content,
            benefits,
            requirements,
            application_form_embed,
            is_active,
        )
        .await
    }

    /// Delete the join page, freeing the slot
    async fn delete_join_page(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
        pages_mutation::delete_join_page(ctx, id).await
    }

    /// Create the president's message; fails if the slot is already claimed
    #[allow(clippy::too_many_arguments)]
    async fn create_president_message(
        ctx: &GraphQLContext,
        title: String,
        content: String,
        president_name: String,
        president_image: Option<String>,
        designation: String,
        message: Option<String>,
        is_active: Option<bool>,
    ) -> FieldResult<PresidentMessageData> {
        pages_mutation::create_president_message(
            ctx,
            title,
            content,
            president_name,
            president_image,
            designation,
            message,
            is_active,
        )
        .await
    }

    /// Overwrite the president's message
    #[allow(clippy::too_many_arguments)]
    async fn update_president_message(
        ctx: &GraphQLContext,
        id: String,
        title: String,
        content: String,
        president_name: String,
        president_image: Option<String>,
        designation: String,
        message: Option<String>,
        is_active: bool,
    ) -> FieldResult<PresidentMessageData> {
        pages_mutation::update_president_message(
            ctx,
            id,
            title,
            content,
            president_name,
            president_image,
            designation,
            message,
            is_active,
        )
        .await
    }

    /// Delete the president's message, freeing the slot
    async fn delete_president_message(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
        pages_mutation::delete_president_message(ctx, id).await
    }

    /// Overwrite the footer contact details, creating the row on first use
    async fn set_contact_page(
        ctx: &GraphQLContext,
        address: String,
        phone: String,
        email: String,
        is_active: Option<bool>,
    ) -> FieldResult<ContactPageData> {
        contact_mutation::set_contact_page(ctx, address, phone, email, is_active).await
    }

    /// Delete a contact page row
    async fn delete_contact_page(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
        contact_mutation::delete_contact_page(ctx, id).await
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Create an event
    #[allow(clippy::too_many_arguments)]
    async fn create_event(
        ctx: &GraphQLContext,
        title: String,
        content: String,
        event_date: NaiveDate,
        event_location: String,
        event_image: Option<String>,
        long_description: Option<String>,
        is_active: Option<bool>,
    ) -> FieldResult<EventData> {
        events_mutation::create_event(
            ctx,
            title,
            content,
            event_date,
            event_location,
            event_image,
            long_description,
            is_active,
        )
        .await
    }

    /// Overwrite an event
    #[allow(clippy::too_many_arguments)]
    async fn update_event(
        ctx: &GraphQLContext,
        id: String,
        title: String,
        content: String,
        event_date: NaiveDate,
        event_location: String,
        event_image: Option<String>,
        long_description: Option<String>,
        is_active: bool,
    ) -> FieldResult<EventData> {
        events_mutation::update_event(
            ctx,
            id,
            title,
            content,
            event_date,
            event_location,
            event_image,
            long_description,
            is_active,
        )
        .await
    }

    /// Delete an event and its gallery strip
    async fn delete_event(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
        events_mutation::delete_event(ctx, id).await
    }

    /// Attach an image to an event's gallery strip
    async fn add_event_image(
        ctx: &GraphQLContext,
        event_id: String,
        image: String,
        caption: Option<String>,
        sort_order: Option<i32>,
    ) -> FieldResult<EventImageData> {
        events_mutation::add_event_image(ctx, event_id, image, caption, sort_order).await
    }

    /// Overwrite an event gallery image
    async fn update_event_image(
        ctx: &GraphQLContext,
        id: String,
        image: String,
        caption: String,
        sort_order: i32,
    ) -> FieldResult<EventImageData> {
        events_mutation::update_event_image(ctx, id, image, caption, sort_order).await
    }

    /// Remove an image from an event's gallery strip
    async fn delete_event_image(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
        events_mutation::delete_event_image(ctx, id).await
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// Create a roster member directly (defaults to active)
    #[allow(clippy::too_many_arguments)]
    async fn create_member(
        ctx: &GraphQLContext,
        title: String,
        content: String,
        member_name: String,
        member_position: String,
        email: String,
        member_image: Option<String>,
        member_bio: Option<String>,
        phone_number: Option<String>,
        date_of_joining: Option<NaiveDate>,
        society_designation: Option<SocietyDesignationData>,
        is_active: Option<bool>,
    ) -> FieldResult<MemberData> {
        members_mutation::create_member(
            ctx,
            title,
            content,
            member_name,
            member_position,
            email,
            member_image,
            member_bio,
            phone_number,
            date_of_joining,
            society_designation,
            is_active,
        )
        .await
    }

    /// Overwrite a member profile
    #[allow(clippy::too_many_arguments)]
    async fn update_member(
        ctx: &GraphQLContext,
        id: String,
        title: String,
        content: String,
        member_name: String,
        member_position: String,
        email: String,
        member_image: Option<String>,
        member_bio: Option<String>,
        phone_number: Option<String>,
        date_of_joining: Option<NaiveDate>,
        society_designation: SocietyDesignationData,
        is_active: bool,
    ) -> FieldResult<MemberData> {
        members_mutation::update_member(
            ctx,
            id,
            title,
            content,
            member_name,
            member_position,
            email,
            member_image,
            member_bio,
            phone_number,
            date_of_joining,
            society_designation,
            is_active,
        )
        .await
    }

    /// Approve an application or retire a member
    async fn set_member_active(
        ctx: &GraphQLContext,
        id: String,
        active: bool,
    ) -> FieldResult<MemberData> {
        members_mutation::set_member_active(ctx, id, active).await
    }

    /// Delete a member
    async fn delete_member(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
        members_mutation::delete_member(ctx, id).await
    }

    // =========================================================================
    // Gallery
    // =========================================================================

    /// Add a photo to the society gallery
    async fn add_gallery_image(
        ctx: &GraphQLContext,
        image: String,
        caption: Option<String>,
        is_active: Option<bool>,
    ) -> FieldResult<GalleryImageData> {
        gallery_mutation::add_gallery_image(ctx, image, caption, is_active).await
    }

    /// Overwrite a gallery photo
    async fn update_gallery_image(
        ctx: &GraphQLContext,
        id: String,
        image: String,
        caption: Option<String>,
        is_active: bool,
    ) -> FieldResult<GalleryImageData> {
        gallery_mutation::update_gallery_image(ctx, id, image, caption, is_active).await
    }

    /// Remove a photo from the gallery
    async fn delete_gallery_image(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
        gallery_mutation::delete_gallery_image(ctx, id).await
    }

    // =========================================================================
    // Updates
    // =========================================================================

    /// Post an announcement
    async fn create_update(
        ctx: &GraphQLContext,
        title: String,
        content: String,
        priority: Option<i32>,
        is_active: Option<bool>,
    ) -> FieldResult<UpdateData> {
        updates_mutation::create_update(ctx, title, content, priority, is_active).await
    }

    /// Overwrite an announcement
    async fn update_update(
        ctx: &GraphQLContext,
        id: String,
        title: String,
        content: String,
        priority: i32,
        is_active: bool,
    ) -> FieldResult<UpdateData> {
        updates_mutation::update_update(ctx, id, title, content, priority, is_active).await
    }

    /// Delete an announcement
    async fn delete_update(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
        updates_mutation::delete_update(ctx, id).await
    }

    // =========================================================================
    // Contact inbox
    // =========================================================================

    /// Bulk-resolve inbox messages; returns how many rows actually flipped
    async fn resolve_contact_messages(
        ctx: &GraphQLContext,
        ids: Vec<String>,
        notes: Option<String>,
    ) -> FieldResult<i32> {
        contact_mutation::resolve_contact_messages(ctx, ids, notes).await
    }

    /// Bulk-reopen inbox messages; returns how many rows actually flipped
    async fn unresolve_contact_messages(
        ctx: &GraphQLContext,
        ids: Vec<String>,
    ) -> FieldResult<i32> {
        contact_mutation::unresolve_contact_messages(ctx, ids).await
    }

    /// Edit a message's resolved flag and notes; audit fields are derived
    async fn admin_update_contact_message(
        ctx: &GraphQLContext,
        id: String,
        is_resolved: bool,
        notes: String,
    ) -> FieldResult<ContactMessageData> {
        contact_mutation::admin_update_contact_message(ctx, id, is_resolved, notes).await
    }

    /// Delete an inbox message
    async fn delete_contact_message(ctx: &GraphQLContext, id: String) -> FieldResult<bool> {
        contact_mutation::delete_contact_message(ctx, id).await
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
